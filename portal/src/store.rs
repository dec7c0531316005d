//! Persisted credential record.
//!
//! SYSTEM CONTEXT
//! ==============
//! One slot per browser profile (or per CLI state file): a bearer token and the
//! JSON-serialized user it belongs to, kept under two fixed keys. The backend
//! behind the keys is pluggable so the session controller never learns whether
//! it is talking to `localStorage`, a file, or memory.
//!
//! ERROR HANDLING
//! ==============
//! Absence and corruption look the same to callers: `load` returns `None`.
//! A corrupt profile is logged and otherwise ignored.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::types::User;

/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "tutorhub.token";
/// Key holding the JSON-serialized [`User`].
pub const USER_KEY: &str = "tutorhub.user";

/// Synchronous string key/value backend.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        crate::lock(&self.entries).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        crate::lock(&self.entries).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        crate::lock(&self.entries).insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        crate::lock(&self.entries).remove(key);
    }
}

/// A token together with the profile it authenticates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredCredentials {
    pub token: String,
    pub user: User,
}

/// Typed view over the two credential keys of a [`KeyValueStorage`].
#[derive(Debug)]
pub struct TokenStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist `token` and `user`, replacing whatever was stored.
    ///
    /// The profile is serialized before anything is written so a failure
    /// leaves the previous record intact.
    pub fn save(&self, token: &str, user: &User) {
        let raw_user = match serde_json::to_string(user) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("refusing to persist session: user profile did not serialize: {err}");
                return;
            }
        };
        self.storage.set(USER_KEY, &raw_user);
        self.storage.set(TOKEN_KEY, token);
    }

    /// Read the stored pair. `None` when either half is missing, the token is
    /// blank, or the profile no longer deserializes.
    pub fn load(&self) -> Option<StoredCredentials> {
        let token = self.token()?;
        let raw_user = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some(StoredCredentials { token, user }),
            Err(err) => {
                log::warn!("ignoring stored session: user profile is corrupt: {err}");
                None
            }
        }
    }

    /// The bearer token alone, if a non-blank one is stored.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
    }

    /// Remove both keys.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
