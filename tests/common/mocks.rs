//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `streamchat::adapters::mock` and adds helpers
//! for building event-stream bodies.

#![allow(dead_code)]

#[allow(unused_imports)]
pub use streamchat::adapters::mock::{
    live_stream, InMemoryStore, LiveFeed, MockHttpClient, MockResponse, RecordedRequest,
};
#[allow(unused_imports)]
pub use streamchat::traits::{Headers, HttpClient, HttpError, Response};

use bytes::Bytes;

/// One default-type SSE event carrying `data`.
pub fn sse_event(data: &str) -> String {
    format!("data: {}\n\n", data)
}

/// A complete body: one event per fragment, then the end sentinel.
pub fn sse_body(fragments: &[&str]) -> String {
    let mut body: String = fragments.iter().map(|f| sse_event(f)).collect();
    body.push_str(&sse_event("[DONE]"));
    body
}

/// Split `body` into chunks of at most `size` bytes, ignoring char boundaries.
pub fn chunked(body: &str, size: usize) -> Vec<Bytes> {
    body.as_bytes()
        .chunks(size)
        .map(Bytes::copy_from_slice)
        .collect()
}

/// Canned successful `POST /clear` response.
pub fn clear_ok() -> MockResponse {
    MockResponse::Success(Response::new(200, Bytes::new()))
}
