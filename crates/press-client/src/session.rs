//! Session store - the persisted half of the client's auth state.

use std::sync::Arc;

use press_core::StorageError;
use press_core::domain::{Session, User};
use press_core::ports::KeyValueStore;

pub const SESSION_ID_KEY: &str = "session_id";
pub const USER_KEY: &str = "user";

/// Session identifier and cached user, kept as two entries of a key-value
/// store. The user entry is JSON.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist both entries, overwriting whatever was there. On failure
    /// neither entry is left behind.
    pub fn save(&self, session_id: &str, user: &User) -> Result<(), StorageError> {
        let user_json =
            serde_json::to_string(user).map_err(|e| StorageError::Serialization(e.to_string()))?;

        let written = self
            .store
            .set(SESSION_ID_KEY, session_id)
            .and_then(|_| self.store.set(USER_KEY, &user_json));
        if let Err(e) = written {
            self.clear().ok();
            return Err(e);
        }

        tracing::debug!(username = %user.username, "Session saved");
        Ok(())
    }

    /// Remove both entries. Safe to call when already logged out.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(SESSION_ID_KEY)?;
        self.store.remove(USER_KEY)?;
        tracing::debug!("Session cleared");
        Ok(())
    }

    /// True iff a session identifier is stored.
    pub fn is_logged_in(&self) -> bool {
        self.session_id().is_some()
    }

    pub fn session_id(&self) -> Option<String> {
        self.read(SESSION_ID_KEY)
    }

    /// Cached user, `None` when absent or undecodable.
    pub fn user(&self) -> Option<User> {
        let raw = self.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Stored user record is not valid JSON");
                None
            }
        }
    }

    /// The full session, only when both entries are present.
    pub fn current(&self) -> Option<Session> {
        let session_id = self.session_id()?;
        let user = self.user()?;
        Some(Session::new(session_id, user))
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store.get(key).unwrap_or_else(|e| {
            tracing::error!(key, error = %e, "Failed to read session entry");
            None
        })
    }
}
