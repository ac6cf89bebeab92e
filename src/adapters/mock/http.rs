//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses, canned event streams, or streams fed live by the test.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use crate::traits::{ByteStream, Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a buffered response (a streamed GET yields the body as one chunk)
    Success(Response),
    /// Fail the request itself
    Error(HttpError),
    /// Return a body stream that yields these chunks and then ends
    Stream(Vec<Bytes>),
    /// Return a body stream that yields these chunks and then fails
    FailingStream { chunks: Vec<Bytes>, error: HttpError },
    /// Return a body stream that never yields anything
    Pending,
    /// Return a body stream fed by a [`LiveFeed`]
    Live(LiveStream),
}

/// Sending half of a live mock stream, held by the test.
///
/// Dropping the feed ends the body stream.
#[derive(Debug, Clone)]
pub struct LiveFeed {
    sender: mpsc::UnboundedSender<Result<Bytes, HttpError>>,
}

impl LiveFeed {
    /// Send one SSE event carrying `data`.
    ///
    /// Returns false once the reading side has gone away.
    pub fn send_event(&self, data: &str) -> bool {
        self.send_raw(format!("data: {}\n\n", data))
    }

    /// Send raw bytes exactly as given.
    pub fn send_raw(&self, raw: impl Into<Bytes>) -> bool {
        self.sender.send(Ok(raw.into())).is_ok()
    }

    /// Fail the body stream with `error`.
    pub fn fail(&self, error: HttpError) -> bool {
        self.sender.send(Err(error)).is_ok()
    }

    /// Whether the reading side has gone away (stream closed or aborted).
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Receiving half of a live mock stream. Can be consumed by one request only.
#[derive(Debug, Clone)]
pub struct LiveStream {
    receiver: Arc<Mutex<Option<mpsc::UnboundedReceiver<Result<Bytes, HttpError>>>>>,
}

impl LiveStream {
    fn take(&self) -> Option<mpsc::UnboundedReceiver<Result<Bytes, HttpError>>> {
        self.receiver.lock().unwrap().take()
    }
}

/// Create a connected live feed / live stream pair.
pub fn live_stream() -> (LiveFeed, LiveStream) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (
        LiveFeed { sender },
        LiveStream {
            receiver: Arc::new(Mutex::new(Some(receiver))),
        },
    )
}

/// Mock HTTP client for testing.
///
/// Responses are looked up in this order: queued one-shot responses
/// (first whose pattern is a prefix of the URL), exact URL match, prefix
/// match, then the default response.
///
/// # Example
///
/// ```ignore
/// use streamchat::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://mock.test/stream",
///     MockResponse::Stream(vec![Bytes::from("data: Hi\n\ndata: [DONE]\n\n")]),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// One-shot responses consumed in order
    queued: Arc<Mutex<Vec<(String, MockResponse)>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            queued: Arc::new(Mutex::new(Vec::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a URL or URL prefix.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Queue a response used by exactly one request whose URL starts with `pattern`.
    pub fn push_response(&self, pattern: &str, response: MockResponse) {
        self.queued
            .lock()
            .unwrap()
            .push((pattern.to_string(), response));
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get recorded requests made with `method`.
    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.get_requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        {
            let mut queued = self.queued.lock().unwrap();
            if let Some(pos) = queued.iter().position(|(p, _)| url.starts_with(p.as_str())) {
                return Some(queued.remove(pos).1);
            }
        }

        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Longest prefix wins so overlapping patterns behave predictably
        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        self.default_response.lock().unwrap().clone()
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get_stream(&self, url: &str, headers: &Headers) -> Result<ByteStream, HttpError> {
        self.record_request("GET", url, headers, None);

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => {
                if !response.is_success() {
                    return Err(HttpError::ServerError {
                        status: response.status,
                        message: response.text().unwrap_or_default(),
                    });
                }
                let body: Result<Bytes, HttpError> = Ok(response.body);
                Ok(Box::pin(futures::stream::iter(vec![body])))
            }
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Stream(chunks)) => {
                Ok(Box::pin(futures::stream::iter(chunks.into_iter().map(Ok))))
            }
            Some(MockResponse::FailingStream { chunks, error }) => {
                let items = chunks
                    .into_iter()
                    .map(Ok)
                    .chain(std::iter::once(Err(error)));
                Ok(Box::pin(futures::stream::iter(items)))
            }
            Some(MockResponse::Pending) => Ok(Box::pin(
                futures::stream::pending::<Result<Bytes, HttpError>>(),
            )),
            Some(MockResponse::Live(live)) => {
                let receiver = live.take().ok_or_else(|| {
                    HttpError::Other("Live stream already consumed".to_string())
                })?;
                let stream = futures::stream::unfold(receiver, |mut receiver| async move {
                    receiver.recv().await.map(|item| (item, receiver))
                });
                Ok(Box::pin(stream))
            }
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            Some(_) => Err(HttpError::Other(
                "Stream response on non-stream request".to_string(),
            )),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
