//! Unified error type for the chat client.

use std::fmt;

use super::stream::StreamError;
use crate::traits::StoreError;

/// Unified error type for fallible setup and I/O paths.
///
/// The stream controller itself never returns these: its failures degrade to
/// the idle state. `ChatError` covers the edges around it (configuration,
/// persistence, the binary's own I/O).
#[derive(Debug)]
pub enum ChatError {
    /// Stream failure surfaced to a caller.
    Stream(StreamError),

    /// Key-value persistence failure.
    Store(StoreError),

    /// Invalid configuration value.
    Config { key: String, message: String },

    /// Terminal or file I/O failure.
    Io(std::io::Error),
}

impl ChatError {
    /// Shorthand for a configuration error.
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        ChatError::Config {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Stream(e) => write!(f, "{}", e),
            ChatError::Store(e) => write!(f, "{}", e),
            ChatError::Config { key, message } => {
                write!(f, "Invalid configuration for {}: {}", key, message)
            }
            ChatError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatError::Stream(e) => Some(e),
            ChatError::Store(e) => Some(e),
            ChatError::Config { .. } => None,
            ChatError::Io(e) => Some(e),
        }
    }
}

impl From<StreamError> for ChatError {
    fn from(e: StreamError) -> Self {
        ChatError::Stream(e)
    }
}

impl From<StoreError> for ChatError {
    fn from(e: StoreError) -> Self {
        ChatError::Store(e)
    }
}

impl From<std::io::Error> for ChatError {
    fn from(e: std::io::Error) -> Self {
        ChatError::Io(e)
    }
}

/// Result alias used across the crate's fallible setup paths.
pub type ChatResult<T> = Result<T, ChatError>;
