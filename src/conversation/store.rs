use std::sync::Arc;

use tokio::task::JoinHandle;

use super::{ClearNotifier, SessionId};
use crate::models::Message;

/// Authoritative holder of the conversation log and the session identity.
///
/// The log is copy-on-write: [`ConversationStore::snapshot`] hands out a
/// shared immutable view, and any later mutation works on a private copy if
/// such a view is still alive. A reader therefore never sees a half-applied
/// change.
#[derive(Debug)]
pub struct ConversationStore {
    session_id: SessionId,
    messages: Arc<Vec<Message>>,
    notifier: ClearNotifier,
}

impl ConversationStore {
    pub fn new(session_id: SessionId, notifier: ClearNotifier) -> Self {
        Self {
            session_id,
            messages: Arc::new(Vec::new()),
            notifier,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Shared view of the log as it is right now.
    pub fn snapshot(&self) -> Arc<Vec<Message>> {
        Arc::clone(&self.messages)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn append_user(&mut self, content: &str) {
        Arc::make_mut(&mut self.messages).push(Message::user(content));
    }

    pub fn append_assistant_placeholder(&mut self) {
        Arc::make_mut(&mut self.messages).push(Message::assistant(""));
    }

    /// Grow the trailing assistant message by `fragment`.
    ///
    /// The trailing message is replaced by an extended copy. If the log does
    /// not end with an assistant message, a new one holding `fragment` is
    /// appended instead.
    pub fn merge_into_last_assistant(&mut self, fragment: &str) {
        let messages = Arc::make_mut(&mut self.messages);
        match messages.last_mut() {
            Some(last) if last.is_assistant() => *last = last.appended(fragment),
            _ => messages.push(Message::assistant(fragment)),
        }
    }

    /// Empty the log and ask the backend to forget the session.
    ///
    /// The local reset happens immediately and unconditionally. The returned
    /// handle resolves once the notification attempt is over; awaiting it is
    /// optional. Must be called inside a tokio runtime.
    pub fn clear(&mut self) -> JoinHandle<()> {
        self.messages = Arc::new(Vec::new());
        tracing::info!(session_id = %self.session_id, "conversation cleared");
        self.notifier.notify(&self.session_id)
    }
}
