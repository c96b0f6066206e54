//! Client configuration.

use url::Url;

use crate::error::{ApiError, Result};

/// Base URL of the AlgoRythm backend when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/Algorythm";

/// Configuration for the API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Create a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: format!("algorythm/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Override the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the base URL and strip trailing slashes.
    ///
    /// Only `http` and `https` are accepted.
    pub fn normalized_base_url(&self) -> Result<String> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }

        let parsed =
            Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", trimmed, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(trimmed.to_string()),
            other => Err(ApiError::InvalidUrl(format!(
                "unsupported scheme '{}', expected http:// or https://",
                other
            ))),
        }
    }
}
