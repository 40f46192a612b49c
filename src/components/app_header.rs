//! Global header with navigation and the current user's session controls.

use leptos::prelude::*;

use crate::router::{AppRoute, LOGIN_PATH};
use crate::state::session::AppSessionStore;

const NAV_ROUTES: [(AppRoute, &str); 5] = [
    (AppRoute::Home, "Home"),
    (AppRoute::Projects, "Projects"),
    (AppRoute::Templates, "Templates"),
    (AppRoute::Docs, "Docs"),
    (AppRoute::About, "About"),
];

#[component]
pub fn AppHeader() -> impl IntoView {
    let store = expect_context::<AppSessionStore>();
    let session = *store.cell();

    // Restore the returning user's identity as early as possible.
    #[cfg(feature = "csr")]
    {
        let store = store.clone();
        if !store.has_session() {
            leptos::task::spawn_local(async move { store.fetch_session().await });
        }
    }

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = store.api().user_logout().await {
                    log::warn!("logout request failed: {e}");
                }
                store.clear_session();
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(LOGIN_PATH);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = &store;
    });

    let is_admin = move || session.get().login_user.is_some_and(|u| u.is_admin());

    view! {
        <header class="app-header">
            <a class="app-header__brand" href=AppRoute::Home.path()>"AppForge"</a>
            <nav class="app-header__nav">
                {NAV_ROUTES
                    .iter()
                    .map(|(route, label)| view! { <a href=route.path()>{*label}</a> })
                    .collect_view()}
                <Show when=is_admin>
                    <a href=AppRoute::AdminUsers.path()>"User admin"</a>
                    <a href=AppRoute::AdminChatHistory.path()>"Chat history"</a>
                </Show>
            </nav>
            <div class="app-header__user">
                {move || match session.get().login_user {
                    Some(user) => {
                        view! {
                            <span class="app-header__name">{user.display_name().to_owned()}</span>
                            <button class="app-header__logout" on:click=move |_| on_logout.run(())>
                                "Log out"
                            </button>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <Show when=move || !session.get().loading>
                                <a class="app-header__login" href=LOGIN_PATH>"Log in"</a>
                            </Show>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
