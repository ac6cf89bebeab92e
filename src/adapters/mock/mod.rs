//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and live streams
//! - [`InMemoryStore`] - In-memory key-value store

pub mod http;
pub mod store;

pub use http::{live_stream, LiveFeed, LiveStream, MockHttpClient, MockResponse, RecordedRequest};
pub use store::InMemoryStore;
