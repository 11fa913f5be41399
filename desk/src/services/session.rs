//! # Session Store
//!
//! Holds the authenticated session as four plaintext key/value pairs in a
//! process-wide persisted store: `accessToken`, `userId`, `userType`, `userEmail`.
//!
//! The store is injected (see [`SessionStore::new`]) instead of being read ad hoc,
//! so flows and tests decide where the keys live:
//!
//! - [`FileStore`]: JSON file on disk, used by the desktop binary
//! - [`MemoryStore`]: in-process map, used by tests and the mock backend mode

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::UserType;

use crate::core::Result;

pub const KEY_ACCESS_TOKEN: &str = "accessToken";
pub const KEY_USER_ID: &str = "userId";
pub const KEY_USER_TYPE: &str = "userType";
pub const KEY_USER_EMAIL: &str = "userEmail";

const SESSION_KEYS: [&str; 4] = [KEY_ACCESS_TOKEN, KEY_USER_ID, KEY_USER_TYPE, KEY_USER_EMAIL];

/// Persisted string key/value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// JSON file store. The whole map is rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

/// Authenticated credential set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    /// `None` when the stored value is not a known role
    pub user_type: Option<UserType>,
    pub email: String,
}

/// Session context shared by the app and every flow.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.get().is_some())
            .finish()
    }
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Write all four keys.
    pub fn set(&self, token: &str, user_id: &str, user_type: UserType, email: &str) -> Result<()> {
        self.store.set(KEY_ACCESS_TOKEN, token)?;
        self.store.set(KEY_USER_ID, user_id)?;
        self.store.set(KEY_USER_TYPE, user_type.as_str())?;
        self.store.set(KEY_USER_EMAIL, email)?;
        tracing::info!(user_id, user_type = %user_type, "Session stored");
        Ok(())
    }

    /// Read the session back; absent when the token or the user id is missing or empty.
    pub fn get(&self) -> Option<Session> {
        let access_token = self.store.get(KEY_ACCESS_TOKEN).filter(|t| !t.is_empty())?;
        let user_id = self.store.get(KEY_USER_ID).filter(|id| !id.is_empty())?;
        let user_type = self
            .store
            .get(KEY_USER_TYPE)
            .and_then(|raw| raw.parse::<UserType>().ok());
        let email = self.store.get(KEY_USER_EMAIL).unwrap_or_default();

        Some(Session {
            access_token,
            user_id,
            user_type,
            email,
        })
    }

    /// Current bearer token, if a full session exists.
    pub fn token(&self) -> Option<String> {
        self.get().map(|session| session.access_token)
    }

    /// Update only the stored email (profile drift sync).
    pub fn set_email(&self, email: &str) -> Result<()> {
        self.store.set(KEY_USER_EMAIL, email)
    }

    /// Remove all four keys. Attempts every key even if one removal fails.
    pub fn clear(&self) -> Result<()> {
        let mut first_error = None;
        for key in SESSION_KEYS {
            if let Err(e) = self.store.remove(key) {
                tracing::error!(key, error = %e, "Failed to remove session key");
                first_error.get_or_insert(e);
            }
        }
        tracing::info!("Session cleared");
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
