//! File-based key-value store adapter.
//!
//! Values live in a small JSON object on disk (`session.json` in the data
//! directory). Every `set` rewrites the whole file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::traits::{KeyValueStore, StoreError};

/// File name used inside the data directory.
pub const STORE_FILE_NAME: &str = "session.json";

/// JSON-file backed key-value store.
///
/// # Example
///
/// ```ignore
/// use streamchat::adapters::FileKeyValueStore;
/// use streamchat::traits::KeyValueStore;
///
/// let store = FileKeyValueStore::in_dir(&data_dir);
/// store.set("chat_session_id", "abc")?;
/// ```
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store backed by `session.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE_NAME))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Read(format!("{}: {}", self.path.display(), e)))?;
        if json.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&json).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::Write(format!("{}: {}", parent.display(), e)))?;
        }

        let json =
            serde_json::to_string_pretty(map).map_err(|e| StoreError::Write(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| StoreError::Write(format!("{}: {}", self.path.display(), e)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}
