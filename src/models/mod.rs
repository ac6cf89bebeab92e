//! Data model shared by the conversation store and the renderer.

mod message;

pub use message::{Message, MessageRole};
