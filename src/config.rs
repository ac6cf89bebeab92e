//! Client configuration: where the backend lives and where local state goes.
//!
//! Values come from defaults, then environment variables, then CLI flags
//! (applied by the caller through the `with_*` builders).

use std::path::{Path, PathBuf};

use crate::conversation::SessionId;
use crate::error::{ChatError, ChatResult};
use crate::traits::Headers;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "STREAMCHAT_BASE_URL";
/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "STREAMCHAT_DATA_DIR";

/// Header the tunnel in front of the backend needs to skip its browser
/// warning page. Without it the stream request receives HTML, not events.
pub const TUNNEL_HEADER_NAME: &str = "ngrok-skip-browser-warning";
pub const TUNNEL_HEADER_VALUE: &str = "true";

const APP_DIR_NAME: &str = "streamchat";

/// Configuration for the chat client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: dirs::data_dir().map(|d| d.join(APP_DIR_NAME)),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `STREAMCHAT_BASE_URL` and `STREAMCHAT_DATA_DIR`.
    pub fn from_env() -> ChatResult<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(&url);
            config.validate_base_url(BASE_URL_ENV)?;
        }

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                config = config.with_data_dir(dir);
            }
        }

        Ok(config)
    }

    /// Replace the base URL. Surrounding whitespace and trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Drop the data directory; the session identity then lives only in memory.
    pub fn without_data_dir(mut self) -> Self {
        self.data_dir = None;
        self
    }

    /// Check the base URL has an http(s) scheme and parses as a URL.
    pub fn validate_base_url(&self, source: &str) -> ChatResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ChatError::config(
                source,
                format!("'{}' must start with http:// or https://", self.base_url),
            ));
        }
        reqwest::Url::parse(&self.base_url)
            .map_err(|e| ChatError::config(source, format!("'{}': {}", self.base_url, e)))?;
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// `GET` endpoint that streams the reply to `prompt`.
    pub fn stream_url(&self, session_id: &SessionId, prompt: &str) -> String {
        format!(
            "{}/stream?session_id={}&prompt={}",
            self.base_url,
            urlencoding::encode(session_id.as_str()),
            urlencoding::encode(prompt)
        )
    }

    /// `POST` endpoint that discards server-side state for the session.
    pub fn clear_url(&self, session_id: &SessionId) -> String {
        format!(
            "{}/clear?session_id={}",
            self.base_url,
            urlencoding::encode(session_id.as_str())
        )
    }

    /// Headers for the event stream request. No credentials are sent.
    pub fn stream_headers(&self) -> Headers {
        let mut headers = self.clear_headers();
        headers.insert("Accept".to_string(), "text/event-stream".to_string());
        headers
    }

    /// Headers for the clear notification.
    pub fn clear_headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            TUNNEL_HEADER_NAME.to_string(),
            TUNNEL_HEADER_VALUE.to_string(),
        );
        headers
    }
}
