//! Per-session authentication state.

use std::sync::RwLock;

use tracing::debug;
use uuid::Uuid;

use imagehub_core::error::AppError;
use imagehub_core::result::AppResult;
use imagehub_core::traits::SessionContext;
use imagehub_core::types::Identity;

/// Thread-safe handle for one active session.
///
/// Holds the authenticated username, if any. One handle exists per
/// session and is passed explicitly into every operation that needs the
/// caller's identity.
#[derive(Debug)]
pub struct SessionHandle {
    /// Session identifier, for log correlation.
    id: Uuid,
    /// Currently signed-in username, `None` when anonymous.
    username: RwLock<Option<String>>,
}

impl SessionHandle {
    /// Creates a fresh, unauthenticated session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            username: RwLock::new(None),
        }
    }

    /// The session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    fn read(&self) -> Option<String> {
        self.username
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn write(&self, value: Option<String>) {
        *self
            .username
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = value;
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext for SessionHandle {
    fn login(&self, identity: &Identity) -> bool {
        self.write(Some(identity.username.clone()));
        debug!(session_id = %self.id, username = %identity.username, "Session authenticated");
        true
    }

    fn logout(&self) {
        self.write(None);
        debug!(session_id = %self.id, "Session cleared");
    }

    fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    fn current_username(&self) -> AppResult<String> {
        self.read()
            .ok_or_else(|| AppError::session("No authenticated user found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_logout_cycle() {
        let session = SessionHandle::new();
        assert!(!session.is_authenticated());
        assert!(session.current_username().is_err());

        let identity = Identity::new("alice", "hash");
        assert!(session.login(&identity));
        assert!(session.is_authenticated());
        assert_eq!(session.current_username().unwrap(), "alice");

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.current_username().is_err());
    }
}
