//! Controller coupling one conversation with its stream session.
//!
//! [`ChatController`] is what a front end drives: it applies the guards of
//! the input controls (no empty prompt, no submit or clear while a reply is
//! streaming) and funnels stream updates into the conversation.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::adapters::{FileKeyValueStore, ReqwestHttpClient};
use crate::config::Config;
use crate::conversation::{ClearNotifier, ConversationStore, SessionId};
use crate::error::ChatResult;
use crate::models::Message;
use crate::stream::{StreamSession, StreamUpdate, UpdateOutcome};
use crate::traits::HttpClient;

/// Dropping the controller closes any live stream.
pub struct ChatController {
    store: ConversationStore,
    session: StreamSession,
}

impl ChatController {
    pub fn new(client: Arc<dyn HttpClient>, config: Arc<Config>, session_id: SessionId) -> Self {
        let notifier = ClearNotifier::new(Arc::clone(&client), Arc::clone(&config));
        Self {
            store: ConversationStore::new(session_id, notifier),
            session: StreamSession::new(client, config),
        }
    }

    /// Build a controller with the production HTTP client, reusing the
    /// session identity persisted in the configured data directory.
    pub fn from_config(config: Config) -> ChatResult<Self> {
        let session_id = match config.data_dir() {
            Some(dir) => {
                let store = FileKeyValueStore::in_dir(dir);
                SessionId::load_or_create(&store)?
            }
            None => {
                tracing::warn!("no data directory; session identity will not persist");
                SessionId::generate()
            }
        };

        tracing::info!(session_id = %session_id, base_url = %config.base_url(), "chat ready");
        Ok(Self::new(
            Arc::new(ReqwestHttpClient::new()),
            Arc::new(config),
            session_id,
        ))
    }

    /// Send `prompt` and start streaming the reply.
    ///
    /// Returns false without doing anything if the prompt is blank or a reply
    /// is still streaming.
    pub fn submit(&mut self, prompt: &str) -> bool {
        if prompt.trim().is_empty() || self.session.is_streaming() {
            return false;
        }
        self.session.open(&mut self.store, prompt).is_some()
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Clear the conversation. Refused while a reply is streaming.
    pub fn clear(&mut self) -> Option<JoinHandle<()>> {
        if self.session.is_streaming() {
            return None;
        }
        Some(self.store.clear())
    }

    pub async fn next_update(&mut self) -> Option<StreamUpdate> {
        self.session.next_update().await
    }

    pub fn handle_update(&mut self, update: StreamUpdate) -> UpdateOutcome {
        self.session.apply(&mut self.store, update)
    }

    /// Apply updates until the current stream ends.
    ///
    /// Returns the outcome that ended it, or `None` if nothing was streaming.
    pub async fn run_until_idle(&mut self) -> Option<UpdateOutcome> {
        while self.session.is_streaming() {
            let update = self.session.next_update().await?;
            let outcome = self.handle_update(update);
            if outcome.ends_stream() {
                return Some(outcome);
            }
        }
        None
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    pub fn snapshot(&self) -> Arc<Vec<Message>> {
        self.store.snapshot()
    }

    pub fn is_streaming(&self) -> bool {
        self.session.is_streaming()
    }

    pub fn session_id(&self) -> &SessionId {
        self.store.session_id()
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn session(&self) -> &StreamSession {
        &self.session
    }
}

impl std::fmt::Debug for ChatController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatController")
            .field("store", &self.store)
            .field("session", &self.session)
            .finish()
    }
}
