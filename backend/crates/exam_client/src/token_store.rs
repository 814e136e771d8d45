//! Token Store
//!
//! Access and refresh tokens persisted under fixed storage keys.

use crate::storage::{KeyValueStorage, StorageError};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Stored token pair; both opaque to the client
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential {
    pub access_token: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionCredential([REDACTED])")
    }
}

pub struct TokenStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Both tokens present and non-empty, or `None`
    pub fn load(&self) -> Result<Option<SessionCredential>, StorageError> {
        let access = self.non_empty(ACCESS_TOKEN_KEY)?;
        let refresh = self.non_empty(REFRESH_TOKEN_KEY)?;
        Ok(match (access, refresh) {
            (Some(access_token), Some(refresh_token)) => Some(SessionCredential {
                access_token,
                refresh_token,
            }),
            _ => None,
        })
    }

    pub fn access_token(&self) -> Result<Option<String>, StorageError> {
        self.non_empty(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Result<Option<String>, StorageError> {
        self.non_empty(REFRESH_TOKEN_KEY)
    }

    pub fn save(&self, credential: &SessionCredential) -> Result<(), StorageError> {
        self.storage.set(ACCESS_TOKEN_KEY, &credential.access_token)?;
        self.storage.set(REFRESH_TOKEN_KEY, &credential.refresh_token)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        // Remove both even if the first removal fails
        let access = self.storage.remove(ACCESS_TOKEN_KEY);
        let refresh = self.storage.remove(REFRESH_TOKEN_KEY);
        access.and(refresh)
    }

    fn non_empty(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.storage.get(key)?.filter(|v| !v.trim().is_empty()))
    }
}
