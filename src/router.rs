//! Route table and the admin navigation guard.
//!
//! DESIGN
//! ======
//! Routes are a closed enum so metadata is fixed at declaration time. The
//! guard is a plain async function over the session store; the Leptos layer
//! (`components::admin_gate`) only translates its decision into a redirect.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::net::api::SessionApi;
use crate::state::session::{SessionCell, SessionStore};
use crate::util::storage::KeyValueStore;

/// Where unauthorized navigation is sent.
pub const LOGIN_PATH: &str = "/user/login";

/// Static per-route flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_admin: bool,
}

/// Every navigable page of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    About,
    Projects,
    Templates,
    Docs,
    UserLogin,
    UserRegister,
    AdminUsers,
    AdminChatHistory,
}

impl AppRoute {
    pub const ALL: [Self; 9] = [
        Self::Home,
        Self::About,
        Self::Projects,
        Self::Templates,
        Self::Docs,
        Self::UserLogin,
        Self::UserRegister,
        Self::AdminUsers,
        Self::AdminChatHistory,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Templates => "/templates",
            Self::Docs => "/docs",
            Self::UserLogin => LOGIN_PATH,
            Self::UserRegister => "/user/register",
            Self::AdminUsers => "/admin/users",
            Self::AdminChatHistory => "/admin/chat-history",
        }
    }

    pub fn meta(self) -> RouteMeta {
        match self {
            Self::AdminUsers | Self::AdminChatHistory => RouteMeta { requires_admin: true },
            _ => RouteMeta::default(),
        }
    }

    /// Look up a route by exact path; a single trailing `/` is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

/// Metadata for the page at `path`, as seen by a guarded view.
///
/// Paths outside the route table are treated as admin-only.
pub fn guarded_meta(path: &str) -> RouteMeta {
    AppRoute::from_path(path).map_or(RouteMeta { requires_admin: true }, AppRoute::meta)
}

/// Outcome of a guarded navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Allow,
    Redirect(&'static str),
}

/// Decide whether navigation to a route with `meta` may proceed.
///
/// Unflagged routes are allowed without consulting the store. Admin routes
/// fetch the session first unless a confirmed one is loaded, so a user
/// restored from the cache is always revalidated. Only a confirmed admin is
/// allowed; anything else redirects to [`LOGIN_PATH`].
pub async fn guard_navigation<C, K, A>(meta: RouteMeta, store: &SessionStore<C, K, A>) -> Navigation
where
    C: SessionCell,
    K: KeyValueStore,
    A: SessionApi,
{
    if !meta.requires_admin {
        return Navigation::Allow;
    }
    if !store.has_confirmed_session() {
        store.fetch_session().await;
    }
    if store.cell().read_session().is_confirmed_admin() {
        Navigation::Allow
    } else {
        log::debug!("admin route denied; redirecting to {LOGIN_PATH}");
        Navigation::Redirect(LOGIN_PATH)
    }
}
