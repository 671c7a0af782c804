//! Application context wiring all components together.

use std::sync::Arc;

use imagehub_auth::{MemoryCredentialStore, PasswordPolicy, SessionHandle};
use imagehub_core::config::AppConfig;
use imagehub_core::result::AppResult;
use imagehub_pipeline::{AccessGuard, AccountService, ExportService, PageRegistry, UploadPipeline};
use imagehub_storage::UserStorage;

/// Fully wired application components.
///
/// Construction is explicit: the component set is small and fixed, so
/// everything is registered here at compile time rather than discovered
/// at runtime. Sessions are created per caller via
/// [`AppContext::new_session`] and threaded through each call.
#[derive(Debug)]
pub struct AppContext {
    /// Application configuration.
    pub config: AppConfig,
    /// Identity record backend.
    pub credentials: Arc<MemoryCredentialStore>,
    /// Per-user storage layout.
    pub storage: Arc<UserStorage>,
    /// Registration/login/logout flows.
    pub accounts: AccountService,
    /// Batch upload pipeline.
    pub uploads: UploadPipeline,
    /// Review listing and archive export.
    pub exports: ExportService,
    /// Navigation access-control guard.
    pub guard: AccessGuard,
}

impl AppContext {
    /// Wires all components from the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let credentials = Arc::new(MemoryCredentialStore::new());
        let storage = Arc::new(UserStorage::new(config.storage.user_base_dir.clone()));

        let accounts = AccountService::new(
            credentials.clone(),
            storage.clone(),
            PasswordPolicy::new(&config.auth),
        );
        let uploads = UploadPipeline::new(storage.clone());
        let exports = ExportService::new(storage.clone());
        let guard = AccessGuard::new(PageRegistry::standard(), &config.auth);

        Self {
            config,
            credentials,
            storage,
            accounts,
            uploads,
            exports,
            guard,
        }
    }

    /// Loads configuration for the named environment and wires the
    /// application.
    pub fn from_env(env: &str) -> AppResult<Self> {
        Ok(Self::new(AppConfig::load(env)?))
    }

    /// Creates a fresh, unauthenticated session handle.
    pub fn new_session(&self) -> SessionHandle {
        SessionHandle::new()
    }
}
