//! Review listing and archive download flow.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::info;

use imagehub_core::result::AppResult;
use imagehub_core::traits::SessionContext;
use imagehub_core::types::DownloadPayload;
use imagehub_storage::UserStorage;

use crate::archive::{ArchiveBuilder, TiffEncoder};

/// Converts a user's persisted images into one downloadable archive.
#[derive(Debug, Clone)]
pub struct ExportService {
    /// User storage layout.
    storage: Arc<UserStorage>,
}

impl ExportService {
    /// Creates a new export service.
    pub fn new(storage: Arc<UserStorage>) -> Self {
        Self { storage }
    }

    /// Builds the download payload for the caller's stored images.
    ///
    /// Every stored image is re-encoded as TIFF and packed into a single
    /// ZIP; entries are named by enumeration index. Returns `Ok(None)`
    /// when the user has no stored images. A failure while reading,
    /// transcoding, or packing aborts the whole export; partial archives
    /// are never produced.
    pub async fn export(&self, session: &dyn SessionContext) -> AppResult<Option<DownloadPayload>> {
        let username = session.current_username()?;

        let filenames = self.storage.list_images(&username).await?;
        if filenames.is_empty() {
            return Ok(None);
        }

        let mut entries = Vec::with_capacity(filenames.len());
        for filename in &filenames {
            let stored = self.storage.read_image(&username, filename).await?;
            entries.push(TiffEncoder::transcode(stored).await?);
        }

        let archive = ArchiveBuilder::build(entries).await?;
        info!(
            username = %username,
            images = filenames.len(),
            bytes = archive.len(),
            "Built export archive"
        );

        Ok(Some(DownloadPayload::zip(BASE64.encode(&archive))))
    }

    /// Filenames of the caller's stored images, for the review page.
    ///
    /// Returns an empty list when no caller is signed in or the listing
    /// fails; the review page shows a warning instead of an error.
    pub async fn list_review_images(&self, session: &dyn SessionContext) -> Vec<String> {
        let Ok(username) = session.current_username() else {
            return Vec::new();
        };
        self.storage
            .list_images(&username)
            .await
            .unwrap_or_default()
    }
}
