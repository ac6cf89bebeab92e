//! Turns an HTTP body stream into a stream of dispatched SSE events.

use std::collections::VecDeque;
use std::pin::Pin;

use futures_util::stream::{self, Stream};
use futures_util::StreamExt;

use crate::sse::decoder::LineDecoder;
use crate::sse::events::SseMessage;
use crate::sse::parser::SseParser;
use crate::traits::{ByteStream, HttpError};

/// Stream of decoded SSE events or the transport error that ended the body.
pub type SseMessageStream = Pin<Box<dyn Stream<Item = Result<SseMessage, HttpError>> + Send>>;

struct DecodeState {
    body: ByteStream,
    decoder: LineDecoder,
    parser: SseParser,
    ready: VecDeque<SseMessage>,
    failed: bool,
}

/// Decode `body` into SSE events.
///
/// The stream ends when the body ends; an event left incomplete at that point
/// is discarded. A body error is yielded once and ends the stream.
pub fn sse_messages(body: ByteStream) -> SseMessageStream {
    let state = DecodeState {
        body,
        decoder: LineDecoder::new(),
        parser: SseParser::new(),
        ready: VecDeque::new(),
        failed: false,
    };

    let events = stream::unfold(state, |mut state| async move {
        loop {
            if let Some(message) = state.ready.pop_front() {
                return Some((Ok(message), state));
            }

            if state.failed {
                return None;
            }

            match state.body.next().await {
                Some(Ok(chunk)) => {
                    for line in state.decoder.push(&chunk) {
                        if let Some(message) = state.parser.feed_line(&line) {
                            state.ready.push_back(message);
                        }
                    }
                }
                Some(Err(e)) => {
                    state.failed = true;
                    return Some((Err(e), state));
                }
                None => {
                    if state.decoder.has_partial() || state.parser.has_pending() {
                        tracing::debug!("SSE body ended with an incomplete event");
                    }
                    return None;
                }
            }
        }
    });

    Box::pin(events)
}
