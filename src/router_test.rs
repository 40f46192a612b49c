use super::*;
use crate::state::session::USER_INFO_KEY;
use crate::test_support::{network_down, ok, rejected, slow_store_with, store_with, user};
use crate::util::storage::MemoryStorage;

// =============================================================
// Route table
// =============================================================

#[test]
fn only_admin_pages_require_admin() {
    for route in AppRoute::ALL {
        let admin_page = matches!(route, AppRoute::AdminUsers | AppRoute::AdminChatHistory);
        assert_eq!(route.meta().requires_admin, admin_page, "{route:?}");
    }
}

#[test]
fn paths_are_unique_and_resolve_back() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn from_path_ignores_single_trailing_slash() {
    assert_eq!(AppRoute::from_path("/admin/users/"), Some(AppRoute::AdminUsers));
    assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
    assert_eq!(AppRoute::from_path("/admin"), None);
}

#[test]
fn login_route_is_the_redirect_target() {
    assert_eq!(AppRoute::UserLogin.path(), LOGIN_PATH);
    assert!(!AppRoute::UserLogin.meta().requires_admin);
}

#[test]
fn guarded_meta_resolves_known_paths() {
    assert!(guarded_meta("/admin/users").requires_admin);
    assert!(guarded_meta("/admin/users/").requires_admin);
    assert!(guarded_meta("/admin/chat-history").requires_admin);
    assert!(!guarded_meta("/templates").requires_admin);
}

#[test]
fn guarded_meta_fails_closed_for_unknown_paths() {
    assert!(guarded_meta("/admin/apps").requires_admin);
    assert!(guarded_meta("").requires_admin);
}

// =============================================================
// Guard: unflagged routes
// =============================================================

#[tokio::test]
async fn unflagged_routes_never_touch_the_store() {
    let storage = MemoryStorage::new();
    storage.insert_raw(USER_INFO_KEY, &serde_json::to_string(&user(1, "admin")).unwrap());
    let store = store_with(storage, vec![network_down()]);

    for route in AppRoute::ALL.into_iter().filter(|r| !r.meta().requires_admin) {
        assert_eq!(guard_navigation(route.meta(), &store).await, Navigation::Allow);
    }
    assert_eq!(store.api().calls(), 0);
    assert!(store.login_user().is_none());
    assert!(!store.is_loading());
}

// =============================================================
// Guard: admin routes
// =============================================================

#[tokio::test]
async fn admin_route_redirects_when_fetch_is_rejected() {
    let store = store_with(MemoryStorage::new(), vec![rejected(40100)]);
    let nav = guard_navigation(AppRoute::AdminUsers.meta(), &store).await;
    assert_eq!(nav, Navigation::Redirect(LOGIN_PATH));
    assert_eq!(store.api().calls(), 1);
}

#[tokio::test]
async fn admin_route_redirects_on_network_failure() {
    let store = store_with(MemoryStorage::new(), vec![network_down()]);
    let nav = guard_navigation(AppRoute::AdminUsers.meta(), &store).await;
    assert_eq!(nav, Navigation::Redirect(LOGIN_PATH));
}

#[tokio::test]
async fn admin_route_allows_confirmed_admin() {
    let store = store_with(MemoryStorage::new(), vec![ok(Some(user(1, "admin")))]);
    let nav = guard_navigation(AppRoute::AdminUsers.meta(), &store).await;
    assert_eq!(nav, Navigation::Allow);
    assert_eq!(store.login_user(), Some(user(1, "admin")));
}

#[tokio::test]
async fn admin_route_redirects_confirmed_non_admin() {
    let store = store_with(MemoryStorage::new(), vec![ok(Some(user(2, "user")))]);
    let nav = guard_navigation(AppRoute::AdminUsers.meta(), &store).await;
    assert_eq!(nav, Navigation::Redirect(LOGIN_PATH));
}

#[tokio::test]
async fn cached_admin_with_failed_revalidation_redirects() {
    let storage = MemoryStorage::new();
    storage.insert_raw(USER_INFO_KEY, &serde_json::to_string(&user(1, "admin")).unwrap());
    let store = store_with(storage.clone(), vec![network_down()]);

    let nav = guard_navigation(AppRoute::AdminUsers.meta(), &store).await;
    assert_eq!(nav, Navigation::Redirect(LOGIN_PATH));
    assert!(store.login_user().is_none());
    assert!(!storage.contains_key(USER_INFO_KEY));

    // A later check after the fetch settled still redirects.
    let again = guard_navigation(AppRoute::AdminUsers.meta(), &store).await;
    assert_eq!(again, Navigation::Redirect(LOGIN_PATH));
}

#[tokio::test]
async fn loaded_admin_session_skips_fetch() {
    let store = store_with(MemoryStorage::new(), vec![]);
    store.set_session(Some(user(1, "admin")));
    let nav = guard_navigation(AppRoute::AdminUsers.meta(), &store).await;
    assert_eq!(nav, Navigation::Allow);
    assert_eq!(store.api().calls(), 0);
}

#[tokio::test]
async fn loaded_non_admin_session_redirects_without_fetch() {
    let store = store_with(MemoryStorage::new(), vec![]);
    store.set_session(Some(user(3, "user")));
    let nav = guard_navigation(AppRoute::AdminUsers.meta(), &store).await;
    assert_eq!(nav, Navigation::Redirect(LOGIN_PATH));
    assert_eq!(store.api().calls(), 0);
}

#[tokio::test]
async fn provisional_admin_is_revalidated_before_allow() {
    let store = store_with(MemoryStorage::new(), vec![rejected(40100)]);
    store.cell().write_session(|s| s.login_user = Some(user(1, "admin")));
    assert!(!store.has_confirmed_session());

    let nav = guard_navigation(AppRoute::AdminUsers.meta(), &store).await;
    assert_eq!(nav, Navigation::Redirect(LOGIN_PATH));
    assert_eq!(store.api().calls(), 1);
}

// =============================================================
// Guard: racing the mount-time revalidation
// =============================================================

#[tokio::test]
async fn cached_admin_is_not_allowed_while_revalidation_fails() {
    let storage = MemoryStorage::new();
    storage.insert_raw(USER_INFO_KEY, &serde_json::to_string(&user(1, "admin")).unwrap());
    let store = slow_store_with(storage.clone(), vec![network_down(), network_down()]);

    let ((), nav) = tokio::join!(store.fetch_session(), guard_navigation(AppRoute::AdminUsers.meta(), &store));

    assert_eq!(nav, Navigation::Redirect(LOGIN_PATH));
    assert!(store.login_user().is_none());
    assert!(!storage.contains_key(USER_INFO_KEY));
    // The guard saw the provisional admin and asked the backend itself.
    assert_eq!(store.api().observed()[1].login_user, Some(user(1, "admin")));
    assert!(!store.api().observed()[1].confirmed);
}

#[tokio::test]
async fn cached_admin_is_allowed_once_backend_confirms() {
    let storage = MemoryStorage::new();
    storage.insert_raw(USER_INFO_KEY, &serde_json::to_string(&user(1, "admin")).unwrap());
    let store = slow_store_with(storage, vec![ok(Some(user(1, "admin"))), ok(Some(user(1, "admin")))]);

    let ((), nav) = tokio::join!(store.fetch_session(), guard_navigation(AppRoute::AdminUsers.meta(), &store));

    assert_eq!(nav, Navigation::Allow);
    assert_eq!(store.api().calls(), 2);
    assert!(store.has_confirmed_session());
}
