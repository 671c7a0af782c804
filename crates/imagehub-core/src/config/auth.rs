//! Authentication and navigation configuration.

use serde::{Deserialize, Serialize};

/// Authentication, password policy, and navigation target configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path of the login page, used as the redirect target for
    /// unauthenticated callers and after logout.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Default application page authenticated callers are sent to.
    #[serde(default = "default_app_path")]
    pub default_app_path: String,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            default_app_path: default_app_path(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_app_path() -> String {
    "/select-images".to_string()
}

fn default_password_min() -> usize {
    4
}
