//! SSE line and event types

/// Event type used when an event carries no `event:` field.
pub const DEFAULT_EVENT_TYPE: &str = "message";

/// A single classified line from an SSE stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine {
    /// Event type declaration (e.g., "event: message")
    Event(String),
    /// Data payload, with at most one leading space removed
    Data(String),
    /// Last event id
    Id(String),
    /// Reconnection delay hint
    Retry(String),
    /// Empty line - signals end of event
    Empty,
    /// Comment line (starts with ':')
    Comment(String),
    /// Field name the protocol does not define
    Unknown(String),
}

/// A dispatched SSE event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseMessage {
    /// Value of the `event:` field, or [`DEFAULT_EVENT_TYPE`]
    pub event_type: String,
    /// Data lines joined with `\n`, otherwise untouched
    pub data: String,
}

impl SseMessage {
    pub fn new(event_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            data: data.into(),
        }
    }

    /// Whether this is a default `message` event (the only kind a plain
    /// `onmessage` listener sees).
    pub fn is_default_type(&self) -> bool {
        self.event_type == DEFAULT_EVENT_TYPE
    }
}
