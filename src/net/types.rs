//! Wire DTOs for the backend's REST envelope and user/chat resources.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Identifiers arrive either
//! as JSON numbers or as decimal strings (64-bit ids are stringified by the
//! backend to survive JavaScript number precision), so both are accepted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;

/// Status code the backend uses for a successful call.
pub const SUCCESS_CODE: i32 = 0;

/// Role value granting access to admin-only routes.
pub const ADMIN_ROLE: &str = "admin";

/// Standard response envelope returned by every backend endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse<T> {
    /// `0` on success; any other value is an error code.
    pub code: i32,
    /// Payload, absent on failure and sometimes on success.
    pub data: Option<T>,
    /// Human-readable status message.
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> BaseResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Split the envelope into its payload or a business error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Business`] when `code` is not [`SUCCESS_CODE`].
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ApiError::Business { code: self.code, message: self.message.unwrap_or_default() })
        }
    }
}

/// The currently logged-in user as returned by `/user/get/login`.
///
/// This is also the record persisted in the `userInfo` cache entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub user_account: Option<String>,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
    pub user_profile: Option<String>,
    /// Role string; `"admin"` or `"user"` in practice.
    #[serde(default)]
    pub user_role: String,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

impl LoginUser {
    pub fn is_admin(&self) -> bool {
        self.user_role == ADMIN_ROLE
    }

    /// Name to show in the header, falling back to the account name.
    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.user_account.as_deref())
            .unwrap_or("anonymous")
    }
}

/// Public view of a user as listed on the admin page and in chat history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVo {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub user_account: Option<String>,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
    pub user_profile: Option<String>,
    #[serde(default)]
    pub user_role: String,
    pub create_time: Option<String>,
}

/// One persisted chat turn between a user and the generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryVo {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub message: String,
    /// `"user"` or `"ai"`.
    pub message_type: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub app_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: i64,
    pub create_time: Option<String>,
    pub user: Option<UserVo>,
}

/// Paged result wrapper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub page_number: i64,
    #[serde(default)]
    pub page_size: i64,
    #[serde(default)]
    pub total_page: i64,
    #[serde(default)]
    pub total_row: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginRequest {
    pub user_account: String,
    pub user_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegisterRequest {
    pub user_account: String,
    pub user_password: String,
    pub check_password: String,
}

/// Admin user query; unset filters are omitted from the body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQueryRequest {
    pub page_num: i64,
    pub page_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
}

/// Query parameters for cursor-paged chat history of one app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetMessagesParams {
    pub app_id: i64,
    pub page_size: i64,
    /// Cursor: only messages created before this timestamp.
    pub last_create_time: Option<String>,
}

/// Admin chat-history query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryQueryRequest {
    pub page_num: i64,
    pub page_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected integer id")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid id string: {raw}"))),
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}
