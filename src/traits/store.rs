//! Key-value persistence trait abstraction.
//!
//! The client persists a single value (its session identity) across runs.
//! Keeping it behind a trait lets the conversation code run against an
//! in-memory store in tests.

use thiserror::Error;

/// Key-value store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be read
    #[error("Failed to read store: {0}")]
    Read(String),
    /// The backing storage could not be written
    #[error("Failed to write store: {0}")]
    Write(String),
    /// The stored data could not be decoded
    #[error("Store data is corrupt: {0}")]
    Corrupt(String),
}

/// Trait for small string-valued persistence.
///
/// # Example
///
/// ```ignore
/// use streamchat::traits::KeyValueStore;
///
/// fn remember<S: KeyValueStore>(store: &S) -> Result<String, StoreError> {
///     if let Some(existing) = store.get("chat_session_id")? {
///         return Ok(existing);
///     }
///     store.set("chat_session_id", "fresh-id")?;
///     Ok("fresh-id".to_string())
/// }
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
