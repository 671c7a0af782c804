//! Registration, login, and logout flows.

use std::sync::Arc;

use tracing::info;

use imagehub_auth::{PasswordHasher, PasswordPolicy};
use imagehub_core::error::ErrorKind;
use imagehub_core::result::AppResult;
use imagehub_core::traits::{CredentialStore, SessionContext};
use imagehub_storage::UserStorage;

/// Caller-facing outcome of a registration or login attempt.
///
/// Credential problems are reported through `success`/`message` rather
/// than as errors; only environment failures surface as `AppError`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccountResponse {
    /// Whether the attempt succeeded.
    pub success: bool,
    /// Status or error message for display.
    pub message: String,
}

impl AccountResponse {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Orchestrates the credential store, password hashing, and session
/// state for account-level operations.
#[derive(Clone)]
pub struct AccountService {
    /// Identity record backend.
    credentials: Arc<dyn CredentialStore>,
    /// User storage layout, for directory creation at login.
    storage: Arc<UserStorage>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Registration password policy.
    policy: PasswordPolicy,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService").finish()
    }
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        storage: Arc<UserStorage>,
        policy: PasswordPolicy,
    ) -> Self {
        Self {
            credentials,
            storage,
            hasher: PasswordHasher::new(),
            policy,
        }
    }

    /// Registers a new user.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<AccountResponse> {
        if username.trim().is_empty() {
            return Ok(AccountResponse::failed("Username is required"));
        }
        if let Err(e) = self.policy.validate(password) {
            return Ok(AccountResponse::failed(e.message));
        }
        if self.credentials.username_taken(username).await? {
            return Ok(AccountResponse::failed("Username already exists"));
        }

        let hash = self.hasher.hash_password(password)?;
        match self.credentials.create_identity(username, &hash).await {
            Ok(_) => {
                info!(username, "Registered new user");
                Ok(AccountResponse::ok(
                    "Registration successful. You can now log in with your new account.",
                ))
            }
            // Lost a race with a concurrent registration for the same name.
            Err(e) if e.kind == ErrorKind::Conflict => {
                Ok(AccountResponse::failed("Username already exists"))
            }
            Err(e) => Err(e),
        }
    }

    /// Authenticates a user and binds the identity to the session.
    ///
    /// Ensures the user's storage directory exists after a successful
    /// login so uploads have somewhere to land.
    pub async fn login(
        &self,
        session: &dyn SessionContext,
        username: &str,
        password: &str,
    ) -> AppResult<AccountResponse> {
        let Some(identity) = self
            .credentials
            .verify_credentials(username, password)
            .await?
        else {
            return Ok(AccountResponse::failed("Invalid username or password."));
        };

        if !session.login(&identity) {
            return Ok(AccountResponse::failed(
                "Login unsuccessful. Please try again.",
            ));
        }

        self.storage.user_dir(&identity.username).await?;
        info!(username = %identity.username, "User logged in");
        Ok(AccountResponse::ok("Login successful. Redirecting..."))
    }

    /// Clears the session's authentication state.
    pub fn logout(&self, session: &dyn SessionContext) {
        if let Ok(username) = session.current_username() {
            info!(username = %username, "User logged out");
        }
        session.logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagehub_auth::{MemoryCredentialStore, SessionHandle};
    use imagehub_core::config::auth::AuthConfig;

    fn service(dir: &tempfile::TempDir) -> AccountService {
        AccountService::new(
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(UserStorage::new(dir.path())),
            PasswordPolicy::new(&AuthConfig::default()),
        )
    }

    #[tokio::test]
    async fn register_then_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let first = service.register("alice", "pw123").await.unwrap();
        assert!(first.success);
        assert_eq!(
            first.message,
            "Registration successful. You can now log in with your new account."
        );

        let second = service.register("alice", "other").await.unwrap();
        assert!(!second.success);
        assert_eq!(second.message, "Username already exists");
    }

    #[tokio::test]
    async fn register_rejects_blank_username_and_weak_password() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        assert!(!service.register("  ", "pw123").await.unwrap().success);
        assert!(!service.register("bob", "").await.unwrap().success);
    }

    #[tokio::test]
    async fn login_binds_session_and_creates_user_dir() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        let session = SessionHandle::new();

        service.register("alice", "pw123").await.unwrap();
        let response = service.login(&session, "alice", "pw123").await.unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Login successful. Redirecting...");
        assert_eq!(session.current_username().unwrap(), "alice");
        assert!(dir.path().join("alice").is_dir());
    }

    #[tokio::test]
    async fn login_rejects_bad_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        let session = SessionHandle::new();

        service.register("alice", "pw123").await.unwrap();

        let wrong_pw = service.login(&session, "alice", "nope").await.unwrap();
        assert!(!wrong_pw.success);
        assert_eq!(wrong_pw.message, "Invalid username or password.");

        let unknown = service.login(&session, "nobody", "pw123").await.unwrap();
        assert!(!unknown.success);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn logout_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        let session = SessionHandle::new();

        service.register("alice", "pw123").await.unwrap();
        service.login(&session, "alice", "pw123").await.unwrap();

        service.logout(&session);
        assert!(!session.is_authenticated());
    }
}
