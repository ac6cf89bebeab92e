//! Reader task body: opens the event stream and forwards classified events.

use std::sync::Arc;

use futures_util::StreamExt;
use tokio::sync::mpsc;

use super::{StreamEvent, StreamId, StreamUpdate};
use crate::error::StreamError;
use crate::sse::sse_messages;
use crate::traits::{Headers, HttpClient};

/// Read one stream to its end, forwarding updates tagged with `stream_id`.
///
/// Exactly one terminal update (`Done` or `Failed`) is sent unless the
/// receiver goes away first. Reading stops at the sentinel; a body that ends
/// without it is reported as [`StreamError::ConnectionClosed`].
pub async fn run_stream(
    client: Arc<dyn HttpClient>,
    url: String,
    headers: Headers,
    stream_id: StreamId,
    tx: mpsc::UnboundedSender<StreamUpdate>,
) {
    let body = match client.get_stream(&url, &headers).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(%stream_id, error = %e, "failed to open stream");
            let _ = tx.send(StreamUpdate::Failed {
                stream_id,
                error: StreamError::Transport(e),
            });
            return;
        }
    };

    tracing::debug!(%stream_id, "stream opened");
    let mut events = sse_messages(body);
    let mut fragments = 0usize;

    while let Some(next) = events.next().await {
        let message = match next {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(%stream_id, error = %e, fragments, "stream body failed");
                let _ = tx.send(StreamUpdate::Failed {
                    stream_id,
                    error: StreamError::Transport(e),
                });
                return;
            }
        };

        if !message.is_default_type() {
            tracing::trace!(%stream_id, event_type = %message.event_type, "ignoring event");
            continue;
        }

        match StreamEvent::from_data(message.data) {
            StreamEvent::Done => {
                tracing::debug!(%stream_id, fragments, "stream finished");
                let _ = tx.send(StreamUpdate::Done { stream_id });
                return;
            }
            StreamEvent::Fragment(text) => {
                fragments += 1;
                if tx.send(StreamUpdate::Fragment { stream_id, text }).is_err() {
                    tracing::debug!(%stream_id, "update receiver gone, stopping reader");
                    return;
                }
            }
        }
    }

    tracing::warn!(%stream_id, fragments, "stream closed before end sentinel");
    let _ = tx.send(StreamUpdate::Failed {
        stream_id,
        error: StreamError::ConnectionClosed,
    });
}
