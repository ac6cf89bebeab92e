//! In-memory key-value store for testing.
//!
//! Provides a store that keeps values in memory, suitable for testing
//! without file system access.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{KeyValueStore, StoreError};

/// In-memory key-value store for testing.
///
/// # Example
///
/// ```ignore
/// use streamchat::adapters::mock::InMemoryStore;
/// use streamchat::traits::KeyValueStore;
///
/// let store = InMemoryStore::new();
/// assert!(store.get("chat_session_id")?.is_none());
///
/// store.set("chat_session_id", "abc")?;
/// assert_eq!(store.get("chat_session_id")?, Some("abc".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    /// Stored values
    values: Arc<Mutex<HashMap<String, String>>>,
    /// Number of successful writes
    writes: Arc<Mutex<usize>>,
    /// Whether get should fail
    get_should_fail: Arc<Mutex<bool>>,
    /// Whether set should fail
    set_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
            writes: Arc::new(Mutex::new(0)),
            get_should_fail: Arc::new(Mutex::new(false)),
            set_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a store holding one initial value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Configure whether get should fail.
    pub fn set_get_should_fail(&self, should_fail: bool) {
        *self.get_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether set should fail.
    pub fn set_set_should_fail(&self, should_fail: bool) {
        *self.set_should_fail.lock().unwrap() = should_fail;
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    /// Read a value synchronously, bypassing failure injection.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if *self.get_should_fail.lock().unwrap() {
            return Err(StoreError::Read("Mock read failure".to_string()));
        }

        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if *self.set_should_fail.lock().unwrap() {
            return Err(StoreError::Write("Mock write failure".to_string()));
        }

        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_store_new() {
        let store = InMemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_with_value() {
        let store = InMemoryStore::with_value("chat_session_id", "abc");
        assert_eq!(
            store.get("chat_session_id").unwrap(),
            Some("abc".to_string())
        );
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let store = InMemoryStore::new();
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();

        assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_failure_injection() {
        let store = InMemoryStore::with_value("k", "v");

        store.set_get_should_fail(true);
        assert!(matches!(store.get("k"), Err(StoreError::Read(_))));

        store.set_set_should_fail(true);
        assert!(matches!(store.set("k", "w"), Err(StoreError::Write(_))));
        assert_eq!(store.value("k"), Some("v".to_string()));
    }

    #[test]
    fn test_clones_share_state() {
        let store = InMemoryStore::new();
        let clone = store.clone();
        clone.set("k", "v").unwrap();
        assert_eq!(store.value("k"), Some("v".to_string()));
    }
}
