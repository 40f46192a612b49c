//! REST API helpers for communicating with the backend.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`, sending cookies so
//! the backend session follows the browser.
//! Native builds and tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; transport failures, HTTP
//! status failures and undecodable bodies stay distinguishable here even
//! though the session store collapses them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    BaseResponse, ChatHistoryQueryRequest, ChatHistoryVo, GetMessagesParams, LoginUser, Page, UserLoginRequest,
    UserQueryRequest, UserRegisterRequest, UserVo,
};
use crate::config::AppConfig;

pub const GET_LOGIN_USER_PATH: &str = "/user/get/login";
pub const USER_LOGIN_PATH: &str = "/user/login";
pub const USER_REGISTER_PATH: &str = "/user/register";
pub const USER_LOGOUT_PATH: &str = "/user/logout";
pub const LIST_USER_VO_PATH: &str = "/user/list/page/vo";
pub const CHAT_HISTORY_LIST_PATH: &str = "/chatHistory/list";
pub const CHAT_HISTORY_ADMIN_PATH: &str = "/chatHistory/list/page/vo/admin";

/// Source of the authoritative login session.
///
/// The session store depends on this seam rather than on [`ApiClient`] so
/// the revalidation flow can be driven by a scripted source in tests.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// Ask the backend who is logged in.
    async fn fetch_login_user(&self) -> Result<BaseResponse<LoginUser>, ApiError>;
}

/// Thin HTTP client bound to the configured API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /user/get/login`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn get_login_user(&self) -> Result<BaseResponse<LoginUser>, ApiError> {
        self.get(GET_LOGIN_USER_PATH, &[]).await
    }

    /// `POST /user/login`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn user_login(&self, body: &UserLoginRequest) -> Result<BaseResponse<LoginUser>, ApiError> {
        self.post(USER_LOGIN_PATH, body).await
    }

    /// `POST /user/register`, yielding the new user id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn user_register(&self, body: &UserRegisterRequest) -> Result<BaseResponse<i64>, ApiError> {
        self.post(USER_REGISTER_PATH, body).await
    }

    /// `POST /user/logout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn user_logout(&self) -> Result<BaseResponse<bool>, ApiError> {
        self.post(USER_LOGOUT_PATH, &serde_json::json!({})).await
    }

    /// `POST /user/list/page/vo` (admin only).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn list_user_vo_by_page(
        &self,
        body: &UserQueryRequest,
    ) -> Result<BaseResponse<Page<UserVo>>, ApiError> {
        self.post(LIST_USER_VO_PATH, body).await
    }

    /// `GET /chatHistory/list` for one app, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn get_messages(
        &self,
        params: &GetMessagesParams,
    ) -> Result<BaseResponse<Page<ChatHistoryVo>>, ApiError> {
        self.get(CHAT_HISTORY_LIST_PATH, &messages_query(params)).await
    }

    /// `POST /chatHistory/list/page/vo/admin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn list_chat_history_vo_by_page_admin(
        &self,
        body: &ChatHistoryQueryRequest,
    ) -> Result<BaseResponse<Page<ChatHistoryVo>>, ApiError> {
        self.post(CHAT_HISTORY_ADMIN_PATH, body).await
    }

    async fn get<T>(&self, path: &str, query: &[(&'static str, String)]) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::get(&self.endpoint(path))
                .credentials(web_sys::RequestCredentials::Include)
                .query(query.iter().map(|(key, value)| (*key, value.as_str())))
                .build()
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            dispatch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint(path), query);
            Err(ApiError::Unavailable)
        }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::post(&self.endpoint(path))
                .credentials(web_sys::RequestCredentials::Include)
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            dispatch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint(path), body);
            Err(ApiError::Unavailable)
        }
    }
}

impl SessionApi for ApiClient {
    async fn fetch_login_user(&self) -> Result<BaseResponse<LoginUser>, ApiError> {
        self.get_login_user().await
    }
}

#[cfg(feature = "csr")]
async fn dispatch<T>(request: gloo_net::http::Request) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        log::warn!("{} {} -> {}", resp.url(), resp.status_text(), resp.status());
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Query pairs for `GET /chatHistory/list`; the cursor is omitted when unset.
fn messages_query(params: &GetMessagesParams) -> Vec<(&'static str, String)> {
    let mut query = vec![("appId", params.app_id.to_string()), ("pageSize", params.page_size.to_string())];
    if let Some(cursor) = params.last_create_time.as_deref().filter(|c| !c.is_empty()) {
        query.push(("lastCreateTime", cursor.to_owned()));
    }
    query
}
