//! Error type shared by the REST helpers.

/// Failure modes of a REST call against the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request rejected ({code}): {message}")]
    Business { code: i32, message: String },
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for inline display in forms.
    pub fn user_message(&self) -> String {
        match self {
            Self::Business { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}
