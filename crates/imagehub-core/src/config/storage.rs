//! User storage configuration.

use serde::{Deserialize, Serialize};

/// Per-user file storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base directory under which each user's directory tree lives.
    /// Images are persisted at `<user_base_dir>/<username>/images/`.
    #[serde(default = "default_user_base_dir")]
    pub user_base_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            user_base_dir: default_user_base_dir(),
        }
    }
}

fn default_user_base_dir() -> String {
    "./data/users".to_string()
}
