//! Registry connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_url() -> String {
    "127.0.0.1:8888".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("typebook-cli/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Registry address. `host:port` is accepted and treated as `http`.
    #[serde(default = "default_url")]
    pub url: String,

    /// Whole-request timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Reject settings no request could be built from.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigError::invalid("server.url", "must not be empty"));
        }
        if url.chars().any(char::is_whitespace) {
            return Err(ConfigError::invalid(
                "server.url",
                format!("`{url}` contains whitespace"),
            ));
        }
        let scheme = url.split_once("://").map(|(scheme, _)| scheme);
        if let Some(scheme) = scheme.filter(|s| !matches!(*s, "http" | "https")) {
            return Err(ConfigError::invalid(
                "server.url",
                format!("unsupported scheme `{scheme}` (expected http or https)"),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::invalid("server.user_agent", "must not be empty"));
        }
        Ok(())
    }
}
