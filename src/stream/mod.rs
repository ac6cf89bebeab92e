//! Incremental reply streaming.
//!
//! A [`StreamSession`] owns at most one live connection. Its reader task
//! decodes server events and forwards them as tagged [`StreamUpdate`]s; the
//! owner applies them to the conversation in arrival order.

mod handle;
mod reader;
mod session;
mod state;
mod update;

pub use handle::{StreamHandle, StreamId};
pub use reader::run_stream;
pub use session::StreamSession;
pub use state::StreamState;
pub use update::{StreamEvent, StreamUpdate, UpdateOutcome, DONE_SENTINEL};
