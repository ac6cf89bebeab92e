//! Error handling for the chat client.
//!
//! - [`StreamError`]: why a single event stream ended abnormally
//! - [`ChatError`]: unified error for configuration, persistence and I/O,
//!   with [`ChatResult`] as the matching result alias
//!
//! Transport and persistence errors themselves live next to their traits
//! ([`crate::traits::HttpError`], [`crate::traits::StoreError`]).

mod chat_error;
mod stream;

pub use chat_error::{ChatError, ChatResult};
pub use stream::StreamError;
