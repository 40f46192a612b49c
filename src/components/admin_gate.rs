//! Wrapper that runs the admin guard before rendering a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted around admin-only route views. The route metadata is resolved
//! from the current location. Children stay unrendered until the guard
//! allows, and are dropped again (with a redirect) if the session later
//! stops being a confirmed admin, e.g. when the mount-time revalidation in
//! the header fails. Redirects replace the history entry so "back" does not
//! bounce into the guarded page again.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::router::{LOGIN_PATH, Navigation, guarded_meta};
use crate::state::session::{AppSessionStore, SessionState};

/// Render `children` only while the guard's decision for this location holds.
#[component]
pub fn AdminGate(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<AppSessionStore>();
    let session = *store.cell();
    let meta = guarded_meta(&use_location().pathname.get_untracked());
    let decision = RwSignal::new(None::<Navigation>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = crate::router::guard_navigation(meta, &store).await;
        decision.set(Some(outcome));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (meta, store);

    let still_allowed = move || !meta.requires_admin || session.with(SessionState::is_confirmed_admin);

    let navigate = use_navigate();
    Effect::new(move || {
        let target = match decision.get() {
            Some(Navigation::Redirect(path)) => Some(path),
            Some(Navigation::Allow) if !still_allowed() => {
                log::debug!("admin session lost; leaving guarded page");
                Some(LOGIN_PATH)
            }
            _ => None,
        };
        if let Some(path) = target {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || (decision.get() == Some(Navigation::Allow) && still_allowed()).then(|| children())
}
