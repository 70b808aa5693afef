//! # Session Store
//!
//! Persisted session state: the auth token and the signed-in user.
//!
//! The store writes two fixed keys (`pm_auth_token`, `pm_auth_user`; token
//! raw, user JSON-encoded) through an injectable [`StorageBackend`], so the
//! durable backing ([`FileStorage`]) can be swapped for [`MemoryStorage`]
//! in tests. There is no schema versioning.
//!
//! The token and user entry are conceptually set and cleared together, but
//! the store allows a token to exist transiently without a user (login
//! persists the token first).

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::auth::SessionUser;

use crate::core::error::{ApiError, Result};

const TOKEN_KEY: &str = "pm_auth_token";
const USER_KEY: &str = "pm_auth_user";

/// Key-value backend behind the session store.
///
/// Writes are infallible from the caller's perspective; a durable backend
/// that fails to persist logs the failure and keeps serving the in-memory
/// value.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Ephemeral backend for tests and non-persistent front ends
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// Durable backend: a single JSON object file holding the key-value entries.
///
/// The whole map is rewritten on every mutation; the entries are tiny (a
/// token and a one-field user record), so this stays cheap.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Open the store at `path`, loading any existing entries.
    ///
    /// An unreadable or malformed file is logged and treated as empty; the
    /// next mutation overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Session file is malformed, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        match serde_json::to_string_pretty(entries) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session file");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize session entries");
            }
        }
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write();
        entries.remove(key);
        self.persist(&entries);
    }
}

/// The authenticated-user state held between login and logout.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by process memory only; convenient for tests
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Read the persisted token. No side effects.
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    /// Persist the token durably
    pub fn set_token(&self, token: &str) {
        self.backend.set(TOKEN_KEY, token);
    }

    /// Read and parse the persisted user record.
    ///
    /// `Ok(None)` when absent. A corrupt persisted value is a
    /// [`ApiError::Decode`] that propagates to the caller; no validation or
    /// repair is attempted.
    pub fn user(&self) -> Result<Option<SessionUser>> {
        match self.backend.get(USER_KEY) {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| ApiError::Decode(e.to_string())),
        }
    }

    /// Serialize and persist the user record
    pub fn set_user(&self, user: &SessionUser) {
        match serde_json::to_string(user) {
            Ok(raw) => self.backend.set(USER_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize session user"),
        }
    }

    /// Remove both persisted entries. Safe to call when nothing is persisted.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }

    /// True iff a token is present. The token is not validated for expiry
    /// or well-formedness.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let store = SessionStore::in_memory();
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());

        store.set_token("T");
        assert_eq!(store.token().as_deref(), Some("T"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_user_round_trip() {
        let store = SessionStore::in_memory();
        assert!(store.user().unwrap().is_none());

        store.set_user(&SessionUser {
            email: "a@b.com".to_string(),
        });
        assert_eq!(store.user().unwrap().unwrap().email, "a@b.com");
    }

    #[test]
    fn test_corrupt_user_is_a_decode_error() {
        let backend = Arc::new(MemoryStorage::new());
        backend.set(USER_KEY, "{not json");
        let store = SessionStore::new(backend);
        assert!(matches!(store.user(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::in_memory();
        store.clear();
        store.clear();

        store.set_token("T");
        store.set_user(&SessionUser {
            email: "a@b.com".to_string(),
        });
        store.clear();
        assert!(store.token().is_none());
        assert!(store.user().unwrap().is_none());
        store.clear();
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = SessionStore::new(Arc::new(FileStorage::open(&path)));
            store.set_token("T");
            store.set_user(&SessionUser {
                email: "a@b.com".to_string(),
            });
        }

        let store = SessionStore::new(Arc::new(FileStorage::open(&path)));
        assert_eq!(store.token().as_deref(), Some("T"));
        assert_eq!(store.user().unwrap().unwrap().email, "a@b.com");

        store.clear();
        let store = SessionStore::new(Arc::new(FileStorage::open(&path)));
        assert!(store.token().is_none());
    }

    #[test]
    fn test_malformed_session_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not a json object").unwrap();

        let store = SessionStore::new(Arc::new(FileStorage::open(&path)));
        assert!(store.token().is_none());
    }
}
