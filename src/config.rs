//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values are read from
//! compile-time environment variables:
//!
//! - `APPFORGE_API_BASE_URL`: REST base URL (default `http://localhost:8123/api`)
//! - `APPFORGE_PREVIEW_DOMAIN`: host serving generated app previews
//!   (default `http://localhost`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8123/api";
pub const DEFAULT_PREVIEW_DOMAIN: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("APPFORGE_API_BASE_URL must not be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub preview_domain: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), preview_domain: DEFAULT_PREVIEW_DOMAIN.to_owned() }
    }
}

impl AppConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] if the base URL was set to an empty value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("APPFORGE_API_BASE_URL"), option_env!("APPFORGE_PREVIEW_DOMAIN"))
    }

    /// Build config from raw optional values, applying defaults and trimming
    /// trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] if `api_base_url` is blank.
    pub fn from_values(api_base_url: Option<&str>, preview_domain: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = api_base_url
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if api_base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        let preview_domain = preview_domain
            .unwrap_or(DEFAULT_PREVIEW_DOMAIN)
            .trim()
            .trim_end_matches('/')
            .to_owned();
        Ok(Self { api_base_url, preview_domain })
    }
}
