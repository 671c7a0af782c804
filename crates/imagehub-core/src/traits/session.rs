//! Session context trait tracking the current caller.

use crate::result::AppResult;
use crate::types::Identity;

/// Trait for the per-session "who is signed in" handle.
///
/// One value exists per active session and is threaded explicitly through
/// every call that needs it; there is no module-level current-user
/// singleton. Implemented in `imagehub-auth`.
pub trait SessionContext: Send + Sync + std::fmt::Debug {
    /// Mark the session as authenticated for the given identity.
    /// Returns false when the login could not be applied.
    fn login(&self, identity: &Identity) -> bool;

    /// Clear the session state. Infallible at this layer.
    fn logout(&self);

    /// Whether the session is currently authenticated.
    fn is_authenticated(&self) -> bool;

    /// Username of the authenticated caller.
    ///
    /// Fails with a session error when no caller is signed in.
    fn current_username(&self) -> AppResult<String>;
}
