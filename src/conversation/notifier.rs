use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::SessionId;
use crate::config::Config;
use crate::traits::HttpClient;

/// How long a pending clear notification may hold up shutdown.
pub const CLEAR_GRACE_PERIOD: Duration = Duration::from_secs(2);

/// Tells the backend to drop server-side state for a session.
///
/// Fire-and-forget: the request runs on its own task, its response is
/// ignored, and a failure is only logged.
#[derive(Clone)]
pub struct ClearNotifier {
    client: Arc<dyn HttpClient>,
    config: Arc<Config>,
}

impl ClearNotifier {
    pub fn new(client: Arc<dyn HttpClient>, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    /// Spawn the `POST /clear` request. Must be called inside a tokio runtime.
    pub fn notify(&self, session_id: &SessionId) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let url = self.config.clear_url(session_id);
        let headers = self.config.clear_headers();

        tokio::spawn(async move {
            match client.post(&url, "", &headers).await {
                Ok(response) if response.is_success() => {
                    tracing::debug!(status = response.status, "clear notification sent");
                }
                Ok(response) => {
                    tracing::warn!(status = response.status, "clear notification rejected");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "clear notification failed");
                }
            }
        })
    }
}

/// Wait up to `limit` for a notification spawned by [`ClearNotifier::notify`].
///
/// Returns `false` if the request was still in flight when `limit` passed.
pub async fn await_notification(notification: JoinHandle<()>, limit: Duration) -> bool {
    match tokio::time::timeout(limit, notification).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "clear notification task ended abnormally");
            true
        }
        Err(_) => {
            tracing::warn!(?limit, "clear notification still pending, giving up");
            false
        }
    }
}

impl std::fmt::Debug for ClearNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClearNotifier")
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}
