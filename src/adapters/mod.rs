//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileKeyValueStore`] - JSON file key-value storage
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses and live streams
//! - [`mock::InMemoryStore`] - In-memory key-value storage

pub mod file_store;
pub mod mock;
pub mod reqwest_http;

pub use file_store::FileKeyValueStore;
pub use mock::{InMemoryStore, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
