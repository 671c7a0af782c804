//! Per-user directory tree management.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use imagehub_core::error::{AppError, ErrorKind};
use imagehub_core::result::AppResult;
use imagehub_core::types::formats::has_supported_extension;

/// Manages the per-user directory tree the upload pipeline reads and
/// writes.
///
/// Directory creation is idempotent. Saves overwrite silently on name
/// collision; this is a documented limitation, not a contract.
#[derive(Debug, Clone)]
pub struct UserStorage {
    /// Base directory under which all user directories live.
    base: PathBuf,
}

impl UserStorage {
    /// Creates a storage layout rooted at the given base directory.
    ///
    /// The base itself is created lazily, on first use.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base: base_dir.into(),
        }
    }

    /// The user's top-level directory, created if absent.
    pub async fn user_dir(&self, username: &str) -> AppResult<PathBuf> {
        let dir = self.base.join(username);
        fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create user directory for {username}"),
                e,
            )
        })?;
        Ok(dir)
    }

    /// The user's images directory (not created by this call).
    pub fn images_dir(&self, username: &str) -> PathBuf {
        self.base.join(username).join("images")
    }

    /// Persists image bytes under the user's images directory.
    ///
    /// The filename is reduced to its basename before use so uploaded
    /// names can never escape the images directory. Returns the basename
    /// the file was saved under.
    pub async fn save_image(&self, username: &str, filename: &str, data: &[u8]) -> AppResult<String> {
        let basename = sanitize_basename(filename)?;

        let dir = self.images_dir(username);
        fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create images directory: {}", dir.display()),
                e,
            )
        })?;

        let path = dir.join(&basename);
        fs::write(&path, data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to save image '{filename}'"),
                e,
            )
        })?;

        debug!(username, file = %basename, bytes = data.len(), "Saved image");
        Ok(basename)
    }

    /// Lists the user's stored images with a supported extension
    /// (case-insensitive), sorted lexicographically.
    ///
    /// A missing images directory yields an empty list.
    pub async fn list_images(&self, username: &str) -> AppResult<Vec<String>> {
        let dir = self.images_dir(username);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        let mut read_dir = fs::read_dir(&dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to list images directory: {}", dir.display()),
                e,
            )
        })?;

        while let Some(entry) = read_dir.next_entry().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to read directory entry", e)
        })? {
            let name = entry.file_name().to_string_lossy().to_string();
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if is_file && has_supported_extension(&name) {
                entries.push(name);
            }
        }

        // Directory enumeration order is not portable; sort for determinism.
        entries.sort();
        Ok(entries)
    }

    /// Reads one stored image back into memory.
    pub async fn read_image(&self, username: &str, basename: &str) -> AppResult<Bytes> {
        let path = self.images_dir(username).join(sanitize_basename(basename)?);
        let data = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Image not found: {basename}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read image: {basename}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }
}

/// Strips any directory components from an uploaded filename.
///
/// Rejects names that reduce to nothing (empty, `.`, `..`, or a bare
/// separator) instead of guessing a replacement.
fn sanitize_basename(filename: &str) -> AppResult<String> {
    let tail = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    match Path::new(tail).file_name().and_then(|n| n.to_str()) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(AppError::validation(format!(
            "Invalid filename: {filename}"
        ))),
    }
}
