//! Shared fakes for session and guard tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::net::api::SessionApi;
use crate::net::error::ApiError;
use crate::net::types::{BaseResponse, LoginUser};
use crate::state::session::{SessionCell, SessionState, SessionStore};
use crate::util::storage::MemoryStorage;

pub type Reply = Result<BaseResponse<LoginUser>, ApiError>;

pub type TestStore = SessionStore<Arc<RwLock<SessionState>>, MemoryStorage, ScriptedSessionApi>;

/// Session source that answers from a queue and records what the session
/// looked like at the moment each request went out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSessionApi {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    calls: Arc<AtomicUsize>,
    observed: Arc<Mutex<Vec<SessionState>>>,
    watch: Option<Arc<RwLock<SessionState>>>,
    in_flight: bool,
}

impl ScriptedSessionApi {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self { replies: Arc::new(Mutex::new(replies.into())), ..Self::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Session snapshots taken when each request was issued.
    pub fn observed(&self) -> Vec<SessionState> {
        self.observed.lock().unwrap().clone()
    }
}

impl SessionApi for ScriptedSessionApi {
    async fn fetch_login_user(&self) -> Reply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(cell) = &self.watch {
            self.observed.lock().unwrap().push(cell.read_session());
        }
        let reply = self.replies.lock().unwrap().pop_front();
        if self.in_flight {
            // Let concurrently polled futures run while this request is out.
            tokio::task::yield_now().await;
        }
        reply.unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}

pub fn ok(user: Option<LoginUser>) -> Reply {
    Ok(BaseResponse { code: 0, data: user, message: Some("ok".to_owned()) })
}

pub fn rejected(code: i32) -> Reply {
    Ok(BaseResponse { code, data: None, message: Some("not logged in".to_owned()) })
}

pub fn network_down() -> Reply {
    Err(ApiError::Transport("connection refused".to_owned()))
}

pub fn user(id: i64, role: &str) -> LoginUser {
    LoginUser {
        id,
        user_account: Some(format!("account{id}")),
        user_name: Some(format!("User {id}")),
        user_avatar: None,
        user_profile: Some("profile".to_owned()),
        user_role: role.to_owned(),
        create_time: Some("2025-01-01 10:00:00".to_owned()),
        update_time: None,
    }
}

/// Build a store over `storage` whose API observes the store's own cell.
pub fn store_with(storage: MemoryStorage, replies: Vec<Reply>) -> TestStore {
    build_store(storage, replies, false)
}

/// Like [`store_with`], but every request yields once before answering so
/// other joined futures observe the store mid-fetch.
pub fn slow_store_with(storage: MemoryStorage, replies: Vec<Reply>) -> TestStore {
    build_store(storage, replies, true)
}

fn build_store(storage: MemoryStorage, replies: Vec<Reply>, in_flight: bool) -> TestStore {
    let cell = Arc::new(RwLock::new(SessionState::default()));
    let mut api = ScriptedSessionApi::new(replies);
    api.watch = Some(cell.clone());
    api.in_flight = in_flight;
    SessionStore::new(cell, storage, api)
}
