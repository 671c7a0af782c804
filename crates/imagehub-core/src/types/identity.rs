//! Registered user identity record.

use serde::{Deserialize, Serialize};

/// A registered user record as owned by the credential store.
///
/// Created on registration, read on authentication, never deleted by
/// this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique username.
    pub username: String,
    /// Argon2id password hash string.
    pub password_hash: String,
}

impl Identity {
    /// Creates a new identity record.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}
