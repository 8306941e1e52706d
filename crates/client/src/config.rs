//! Client configuration.

use std::time::Duration;
use crate::error::{ApiError, Result};

/// Default backend location.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Environment variable overriding the backend location.
pub const ENV_BASE_URL: &str = "SKILLSTACK_API_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "SKILLSTACK_TIMEOUT_SECS";

/// Settings for [`crate::HttpApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, e.g. `http://127.0.0.1:8000/api`
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Where to send the user when the session is rejected
    pub login_path: String,

    /// User-Agent header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            login_path: "/login".to_string(),
            user_agent: concat!("skillstack/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `SKILLSTACK_API_URL` and `SKILLSTACK_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url)?;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ApiError::Config(format!("{ENV_TIMEOUT_SECS} must be a whole number, got {secs:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the API root. Must be an absolute http(s) URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|e| ApiError::Config(format!("invalid base URL {url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "base URL must use http or https, got {:?}",
                parsed.scheme()
            )));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Absolute URL for an API path such as `/skills/3/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
