//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP operations (event stream GET, notification POST)
//! - [`KeyValueStore`] - Persistence for the session identity

pub mod http;
pub mod store;

pub use http::{ByteStream, Headers, HttpClient, HttpError, Response};
pub use store::{KeyValueStore, StoreError};
