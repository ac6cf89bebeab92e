//! Conversation state: the ordered message log and the session identity.
//!
//! - [`ConversationStore`] - log mutations (append, merge, clear)
//! - [`SessionId`] - persisted identity of this client's conversation
//! - [`ClearNotifier`] - out-of-band "forget this session" request

mod notifier;
mod session_id;
mod store;

pub use notifier::{await_notification, ClearNotifier, CLEAR_GRACE_PERIOD};
pub use session_id::{SessionId, SESSION_ID_KEY};
pub use store::ConversationStore;
