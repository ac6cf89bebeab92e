use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::traits::{KeyValueStore, StoreError};

/// Key under which the session identity is persisted.
pub const SESSION_ID_KEY: &str = "chat_session_id";

/// Stable identity of this client's conversation on the server.
///
/// Created once, persisted, and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// A fresh random identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reuse the identity persisted in `store`, or create and persist one.
    ///
    /// A blank stored value counts as missing.
    pub fn load_or_create(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        if let Some(existing) = store.get(SESSION_ID_KEY)? {
            if !existing.trim().is_empty() {
                return Ok(Self(existing));
            }
        }

        let id = Self::generate();
        store.set(SESSION_ID_KEY, id.as_str())?;
        tracing::debug!(session_id = %id, "created new session identity");
        Ok(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
