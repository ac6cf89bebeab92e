use std::sync::Arc;

use tokio::sync::mpsc;

use super::reader::run_stream;
use super::{StreamHandle, StreamId, StreamState, StreamUpdate, UpdateOutcome};
use crate::config::Config;
use crate::conversation::ConversationStore;
use crate::traits::HttpClient;

/// Lifecycle of the one outbound event stream of a conversation.
///
/// The reader task never touches the log. It forwards [`StreamUpdate`]s over
/// a channel; the owner pulls them with [`StreamSession::next_update`] and
/// applies them with [`StreamSession::apply`], one at a time. Updates from a
/// stream that has since been closed or replaced are recognised by their
/// [`StreamId`] and dropped.
pub struct StreamSession {
    client: Arc<dyn HttpClient>,
    config: Arc<Config>,
    handle: Option<StreamHandle>,
    last_id: StreamId,
    updates_tx: mpsc::UnboundedSender<StreamUpdate>,
    updates_rx: mpsc::UnboundedReceiver<StreamUpdate>,
}

impl StreamSession {
    pub fn new(client: Arc<dyn HttpClient>, config: Arc<Config>) -> Self {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        Self {
            client,
            config,
            handle: None,
            last_id: StreamId::new(0),
            updates_tx,
            updates_rx,
        }
    }

    /// Start streaming the reply to `prompt`.
    ///
    /// The prompt is trimmed; if nothing is left this does nothing and returns
    /// `None`. A live stream is closed first. The user message and an empty
    /// assistant placeholder are appended before the request is spawned, and
    /// request failures arrive later as a `Failed` update. Must be called
    /// inside a tokio runtime.
    pub fn open(&mut self, store: &mut ConversationStore, prompt: &str) -> Option<StreamId> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }

        self.close_handle();

        store.append_user(prompt);
        store.append_assistant_placeholder();

        let stream_id = self.last_id.next();
        self.last_id = stream_id;

        let url = self.config.stream_url(store.session_id(), prompt);
        let headers = self.config.stream_headers();
        let task = tokio::spawn(run_stream(
            Arc::clone(&self.client),
            url,
            headers,
            stream_id,
            self.updates_tx.clone(),
        ));
        self.handle = Some(StreamHandle::new(stream_id, task));

        tracing::info!(
            %stream_id,
            session_id = %store.session_id(),
            prompt_len = prompt.len(),
            "stream opened"
        );
        Some(stream_id)
    }

    /// Wait for the next queued update.
    ///
    /// The session keeps a sender of its own, so this never returns `None`;
    /// with nothing live it simply stays pending.
    pub async fn next_update(&mut self) -> Option<StreamUpdate> {
        self.updates_rx.recv().await
    }

    /// Take a queued update without waiting.
    pub fn try_next_update(&mut self) -> Option<StreamUpdate> {
        self.updates_rx.try_recv().ok()
    }

    /// Apply one update to `store` and to the session state.
    pub fn apply(&mut self, store: &mut ConversationStore, update: StreamUpdate) -> UpdateOutcome {
        if self.active_stream() != Some(update.stream_id()) {
            tracing::trace!(stream_id = %update.stream_id(), "dropping stale update");
            return UpdateOutcome::Stale;
        }

        match update {
            StreamUpdate::Fragment { text, .. } => {
                store.merge_into_last_assistant(&text);
                UpdateOutcome::Merged
            }
            StreamUpdate::Done { .. } => {
                self.close_handle();
                UpdateOutcome::Finished
            }
            StreamUpdate::Failed { stream_id, error } => {
                tracing::warn!(%stream_id, error = %error, "stream failed");
                self.close_handle();
                UpdateOutcome::Failed(error)
            }
        }
    }

    /// Close any live stream and go idle. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(id) = self.active_stream() {
            tracing::info!(stream_id = %id, "stream cancelled");
        }
        self.close_handle();
    }

    fn close_handle(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.close();
        }
    }

    pub fn state(&self) -> StreamState {
        if self.handle.is_some() {
            StreamState::Streaming
        } else {
            StreamState::Idle
        }
    }

    pub fn is_streaming(&self) -> bool {
        self.state().is_streaming()
    }

    pub fn active_stream(&self) -> Option<StreamId> {
        self.handle.as_ref().map(StreamHandle::id)
    }
}

impl Drop for StreamSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for StreamSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSession")
            .field("state", &self.state())
            .field("active_stream", &self.active_stream())
            .field("last_id", &self.last_id)
            .finish_non_exhaustive()
    }
}
