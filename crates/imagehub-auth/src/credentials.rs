//! In-memory credential store backend.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use imagehub_core::error::AppError;
use imagehub_core::result::AppResult;
use imagehub_core::traits::CredentialStore;
use imagehub_core::types::Identity;

use crate::password::PasswordHasher;

/// Credential store keeping identity records in process memory.
///
/// Suitable for single-process deployments and tests; records do not
/// survive a restart.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    /// Identity records keyed by username.
    records: DashMap<String, Identity>,
    /// Password hasher used for verification.
    hasher: PasswordHasher,
}

impl MemoryCredentialStore {
    /// Creates an empty credential store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no identities are registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> AppResult<Option<Identity>> {
        let Some(record) = self.records.get(username) else {
            return Ok(None);
        };

        if self
            .hasher
            .verify_password(password, &record.password_hash)?
        {
            Ok(Some(record.clone()))
        } else {
            Ok(None)
        }
    }

    async fn create_identity(&self, username: &str, password_hash: &str) -> AppResult<Identity> {
        let identity = Identity::new(username, password_hash);

        // Entry-based insert keeps the taken-check and the write atomic.
        match self.records.entry(username.to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict("Username already exists")),
            Entry::Vacant(entry) => {
                entry.insert(identity.clone());
                debug!(username, "Created identity");
                Ok(identity)
            }
        }
    }

    async fn username_taken(&self, username: &str) -> AppResult<bool> {
        Ok(self.records.contains_key(username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_with_user(username: &str, password: &str) -> MemoryCredentialStore {
        let store = MemoryCredentialStore::new();
        let hash = PasswordHasher::new().hash_password(password).unwrap();
        store.create_identity(username, &hash).await.unwrap();
        store
    }

    #[tokio::test]
    async fn verify_matches_correct_password_only() {
        let store = store_with_user("alice", "pw123secret").await;

        let found = store
            .verify_credentials("alice", "pw123secret")
            .await
            .unwrap();
        assert_eq!(found.map(|i| i.username), Some("alice".to_string()));

        assert!(
            store
                .verify_credentials("alice", "other")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            store
                .verify_credentials("nobody", "pw123secret")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn duplicate_username_is_conflict() {
        let store = store_with_user("alice", "pw123secret").await;
        assert!(store.username_taken("alice").await.unwrap());

        let err = store.create_identity("alice", "hash").await.unwrap_err();
        assert_eq!(err.kind, imagehub_core::error::ErrorKind::Conflict);
        assert_eq!(store.len(), 1);
    }
}
