//! SSE (Server-Sent Events) stream decoding
//!
//! SSE format consists of:
//! - `data: <payload>` - data payload line(s)
//! - `event: <type>` - optional event type line
//! - Empty line - signals end of event
//! - Lines starting with `:` - comments (ignored)
//!
//! # Module structure
//! - `events` - Line and event types (SseLine, SseMessage)
//! - `decoder` - Byte chunk to line splitting
//! - `parser` - Line to event accumulation (SseParser, parse_sse_line)
//! - `stream` - Body stream to event stream adapter

mod decoder;
mod events;
mod parser;
mod stream;

pub use decoder::LineDecoder;
pub use events::{SseLine, SseMessage, DEFAULT_EVENT_TYPE};
pub use parser::{parse_sse_line, SseParser};
pub use stream::{sse_messages, SseMessageStream};
