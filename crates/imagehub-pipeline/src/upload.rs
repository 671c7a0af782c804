//! Per-session batch upload pipeline.

use std::sync::Arc;

use tracing::{info, warn};

use imagehub_core::error::ErrorKind;
use imagehub_core::result::AppResult;
use imagehub_core::traits::SessionContext;
use imagehub_core::types::{BatchResult, FileOutcome};
use imagehub_storage::UserStorage;

use crate::payload;

/// Validates, decodes, and persists a batch of encoded image payloads
/// into one identity's storage area.
///
/// Per-file steps are independent: one file's validation failure never
/// aborts the batch. Storage I/O failures escalate to a batch-level
/// error, since they imply environment failure rather than bad input.
#[derive(Debug, Clone)]
pub struct UploadPipeline {
    /// User storage layout.
    storage: Arc<UserStorage>,
}

impl UploadPipeline {
    /// Creates a new upload pipeline.
    pub fn new(storage: Arc<UserStorage>) -> Self {
        Self { storage }
    }

    /// Processes one upload batch for the session's identity.
    ///
    /// `contents` and `filenames` are parallel lists; empty or
    /// length-mismatched input is treated as "no files". The result
    /// preserves input order for both saved names and errors.
    pub async fn submit_batch(
        &self,
        session: &dyn SessionContext,
        contents: &[String],
        filenames: &[String],
    ) -> BatchResult {
        if !session.is_authenticated() {
            return BatchResult::error("You must be logged in to upload images.", Vec::new());
        }

        if contents.is_empty() || filenames.is_empty() || contents.len() != filenames.len() {
            return BatchResult::empty();
        }

        let username = match session.current_username() {
            Ok(username) => username,
            Err(e) => return BatchResult::error("Upload failed", vec![e.message]),
        };

        let mut outcomes = Vec::with_capacity(filenames.len());
        for (content, filename) in contents.iter().zip(filenames) {
            match self.process_file(&username, content, filename).await {
                Ok(saved_name) => outcomes.push(FileOutcome::saved(filename, saved_name)),
                Err(e) if e.kind == ErrorKind::Validation => {
                    warn!(username = %username, file = %filename, error = %e.message, "Rejected upload file");
                    outcomes.push(FileOutcome::failed(filename, e.message));
                }
                // Storage and unexpected failures are batch-fatal.
                Err(e) => {
                    return BatchResult::error(
                        "Upload failed",
                        vec![format!("{filename}: {}", e.message)],
                    );
                }
            }
        }

        let result = BatchResult::from_outcomes(&outcomes);
        info!(
            username = %username,
            kind = ?result.kind,
            saved = result.saved_files.len(),
            failed = result.errors.len(),
            "Upload batch completed"
        );
        result
    }

    /// Runs the per-file steps: extension check, base64 decode, image
    /// content validation, persist. Returns the saved basename.
    async fn process_file(
        &self,
        username: &str,
        content: &str,
        filename: &str,
    ) -> AppResult<String> {
        payload::check_extension(filename)?;
        let decoded = payload::decode_base64_payload(content)?;
        payload::validate_image_content(decoded.clone()).await?;
        self.storage.save_image(username, filename, &decoded).await
    }
}
