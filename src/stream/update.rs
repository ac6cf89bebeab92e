//! Messages the reader task sends to the session owner.

use super::StreamId;
use crate::error::StreamError;

/// Data payload that ends a stream. Matched exactly; never shown.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Meaning of one default-type event's data payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    Fragment(String),
    Done,
}

impl StreamEvent {
    /// Classify a payload. Only the exact sentinel ends the stream; the
    /// payload is not trimmed.
    pub fn from_data(data: String) -> Self {
        if data == DONE_SENTINEL {
            StreamEvent::Done
        } else {
            StreamEvent::Fragment(data)
        }
    }
}

/// One update for the owner to apply, tagged with the stream it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamUpdate {
    Fragment { stream_id: StreamId, text: String },
    Done { stream_id: StreamId },
    Failed { stream_id: StreamId, error: StreamError },
}

impl StreamUpdate {
    pub fn stream_id(&self) -> StreamId {
        match self {
            StreamUpdate::Fragment { stream_id, .. }
            | StreamUpdate::Done { stream_id }
            | StreamUpdate::Failed { stream_id, .. } => *stream_id,
        }
    }
}

/// What applying an update did.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// A fragment was merged into the log
    Merged,
    /// The sentinel arrived; the session is idle
    Finished,
    /// The stream failed; the session is idle and merged content is kept
    Failed(StreamError),
    /// The update belonged to a closed or superseded stream and was ignored
    Stale,
}

impl UpdateOutcome {
    /// Whether this outcome ended the active stream.
    pub fn ends_stream(&self) -> bool {
        matches!(self, UpdateOutcome::Finished | UpdateOutcome::Failed(_))
    }
}
