//! HTTP plumbing shared by the resource clients.
//!
//! Connection pooling, timeouts and TLS belong to `reqwest`; this module only
//! joins paths onto the registry base URL and attaches request bodies.

use std::borrow::Cow;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};

use crate::error::ClientError;

/// Default registry address used by the original server distribution.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8888";

/// Settings for building a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Registry base URL; `host:port` is accepted and treated as `http`.
    pub base_url: String,
    /// Whole-request timeout handed to the HTTP client. `None` disables it.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
            user_agent: format!("typebook-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Immutable handle to the registry: an HTTP client plus base URL.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
}

impl Transport {
    /// Build a transport with its own `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(options: &ClientOptions) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(options.user_agent.as_str());
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_http_client(builder.build()?, &options.base_url))
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, %url, "registry request");
        self.http.request(method, url)
    }
}

/// Trim trailing slashes and default the scheme to `http`.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// Percent-encode one path segment (subject or property name).
pub(crate) fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Attach an optional `text/plain` body; empty text sends no body.
pub(crate) fn with_text(request: RequestBuilder, text: Option<&str>) -> RequestBuilder {
    match text.filter(|t| !t.is_empty()) {
        Some(text) => request
            .header(CONTENT_TYPE, "text/plain")
            .body(text.to_string()),
        None => request,
    }
}

/// Attach a property value verbatim as a `text/plain` body, even when empty.
pub(crate) fn with_value(request: RequestBuilder, value: &str) -> RequestBuilder {
    request
        .header(CONTENT_TYPE, "text/plain")
        .body(value.to_string())
}

/// Attach a schema definition verbatim as a JSON body.
pub(crate) fn with_definition(request: RequestBuilder, definition: &str) -> RequestBuilder {
    request
        .header(CONTENT_TYPE, "application/json")
        .body(definition.to_string())
}
