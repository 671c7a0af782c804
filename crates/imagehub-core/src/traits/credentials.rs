//! Credential store trait for pluggable identity backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::Identity;

/// Trait for identity record backends.
///
/// The [`CredentialStore`] owns identity records and all password
/// verification. It is defined here in `imagehub-core` and implemented in
/// `imagehub-auth`.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Verify a username/password pair.
    ///
    /// Returns the matching identity when the credentials are valid,
    /// `None` when the user is unknown or the password does not match.
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> AppResult<Option<Identity>>;

    /// Create a new identity from a username and an already-hashed
    /// password. Fails with a conflict error when the username is taken.
    async fn create_identity(&self, username: &str, password_hash: &str) -> AppResult<Identity>;

    /// Check whether a username is already registered.
    async fn username_taken(&self, username: &str) -> AppResult<bool>;
}
