//! Login-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard and user-aware components read the session from here;
//! login, logout and revalidation write it. The last seen user is mirrored
//! to the `userInfo` storage entry so a returning visitor sees their identity
//! before the backend answers.
//!
//! TRADE-OFFS
//! ==========
//! The cached entry is advisory. It is only ever adopted as a provisional
//! value inside [`SessionStore::fetch_session`], which always ends with the
//! backend's answer replacing it, or with the session cleared when no
//! confirmed answer arrives. `SessionState::confirmed` stays false while a
//! provisional user is shown, and authorization checks require it.
//!
//! CONCURRENCY
//! ===========
//! Each individual read or write of the [`SessionCell`] is atomic, but a
//! fetch is a sequence of writes around an await point. Overlapping fetches
//! are not deduplicated and the last write wins; `loading` is a display hint
//! only.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api::{ApiClient, SessionApi};
use crate::net::types::LoginUser;
use crate::util::storage::{KeyValueStore, LocalStorage, load_json, save_json};

/// Storage key for the cached login user.
pub const USER_INFO_KEY: &str = "userInfo";

/// Current user and fetch status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub login_user: Option<LoginUser>,
    pub loading: bool,
    /// `login_user` came from a login, logout or backend answer rather than
    /// from the storage cache.
    pub confirmed: bool,
}

impl SessionState {
    pub fn is_confirmed_admin(&self) -> bool {
        self.confirmed && self.login_user.as_ref().is_some_and(LoginUser::is_admin)
    }
}

/// Shared slot holding the [`SessionState`].
///
/// Implemented for the reactive `RwSignal` used by the UI and for a plain
/// `Arc<RwLock<_>>` used off the reactive graph.
pub trait SessionCell {
    fn read_session(&self) -> SessionState;
    fn write_session(&self, f: impl FnOnce(&mut SessionState));
}

impl SessionCell for RwSignal<SessionState> {
    fn read_session(&self) -> SessionState {
        self.get_untracked()
    }

    fn write_session(&self, f: impl FnOnce(&mut SessionState)) {
        self.update(f);
    }
}

impl SessionCell for Arc<RwLock<SessionState>> {
    fn read_session(&self) -> SessionState {
        self.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn write_session(&self, f: impl FnOnce(&mut SessionState)) {
        f(&mut self.write().unwrap_or_else(PoisonError::into_inner));
    }
}

/// The store as wired into the running app.
pub type AppSessionStore = SessionStore<RwSignal<SessionState>, LocalStorage, ApiClient>;

/// Owner of "who is logged in" for the running client.
#[derive(Clone, Debug)]
pub struct SessionStore<C, K, A> {
    cell: C,
    storage: K,
    api: A,
}

impl<C, K, A> SessionStore<C, K, A>
where
    C: SessionCell,
    K: KeyValueStore,
    A: SessionApi,
{
    pub fn new(cell: C, storage: K, api: A) -> Self {
        Self { cell, storage, api }
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn login_user(&self) -> Option<LoginUser> {
        self.cell.read_session().login_user
    }

    pub fn has_session(&self) -> bool {
        self.cell.read_session().login_user.is_some()
    }

    /// A user is loaded and was not restored from the cache.
    pub fn has_confirmed_session(&self) -> bool {
        let state = self.cell.read_session();
        state.confirmed && state.login_user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.cell.read_session().loading
    }

    /// Replace the current session and mirror it to storage.
    ///
    /// `None` removes the storage entry. Write failures are logged and
    /// otherwise ignored; the in-memory session is updated regardless.
    pub fn set_session(&self, user: Option<LoginUser>) {
        match &user {
            Some(user) => {
                if let Err(e) = save_json(&self.storage, USER_INFO_KEY, user) {
                    log::warn!("failed to cache login user: {e}");
                }
            }
            None => self.storage.remove_item(USER_INFO_KEY),
        }
        self.cell.write_session(|state| {
            state.login_user = user;
            state.confirmed = true;
        });
    }

    pub fn clear_session(&self) {
        self.set_session(None);
    }

    /// Restore the cached user if nothing is loaded, then revalidate with
    /// the backend.
    ///
    /// A success response (code `0`) becomes the session, including an empty
    /// one. Any other outcome clears the session.
    pub async fn fetch_session(&self) {
        self.cell.write_session(|state| state.loading = true);

        if !self.has_session() {
            if let Some(cached) = load_json::<LoginUser>(&self.storage, USER_INFO_KEY) {
                log::debug!("restored provisional session for user {}", cached.id);
                self.cell.write_session(|state| {
                    if state.login_user.is_none() {
                        state.login_user = Some(cached);
                        state.confirmed = false;
                    }
                });
            }
        }

        let confirmed = match self.api.fetch_login_user().await {
            Ok(resp) if resp.is_success() => resp.data,
            Ok(resp) => {
                log::debug!("session revalidation rejected with code {}", resp.code);
                None
            }
            Err(e) => {
                log::warn!("session revalidation failed: {e}");
                None
            }
        };
        self.set_session(confirmed);

        self.cell.write_session(|state| state.loading = false);
    }
}
