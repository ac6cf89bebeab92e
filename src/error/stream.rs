//! Streaming-related error types.
//!
//! These errors end a single event stream. None of them is fatal: the stream
//! session tears the connection down, returns to idle and keeps whatever
//! content was merged before the failure.

use std::fmt;

use crate::traits::HttpError;

/// Stream-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError {
    /// Opening the stream or reading its body failed.
    Transport(HttpError),

    /// The server closed the body before sending the end-of-stream sentinel.
    ConnectionClosed,
}

impl StreamError {
    /// Whether the failure came from the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, StreamError::Transport(_))
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StreamError::Transport(HttpError::ServerError { status, .. }) => {
                format!("The server rejected the request ({}).", status)
            }
            StreamError::Transport(HttpError::ConnectionFailed(_)) => {
                "Could not reach the server.".to_string()
            }
            StreamError::Transport(_) => "The connection to the server failed.".to_string(),
            StreamError::ConnectionClosed => {
                "The server closed the stream before the reply finished.".to_string()
            }
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Transport(e) => write!(f, "Stream transport error: {}", e),
            StreamError::ConnectionClosed => {
                write!(f, "Stream closed before end-of-stream sentinel")
            }
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Transport(e) => Some(e),
            StreamError::ConnectionClosed => None,
        }
    }
}

impl From<HttpError> for StreamError {
    fn from(e: HttpError) -> Self {
        StreamError::Transport(e)
    }
}
