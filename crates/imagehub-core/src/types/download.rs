//! Download payload handed to the caller at the export boundary.

use serde::{Deserialize, Serialize};

/// A ready-to-serve archive download.
///
/// `content` carries the archive bytes base64-encoded so the payload can
/// cross a JSON boundary unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadPayload {
    /// Suggested filename for the download.
    pub filename: String,
    /// Base64-encoded archive bytes.
    pub content: String,
    /// MIME type of the decoded content.
    pub mime_type: String,
}

impl DownloadPayload {
    /// Creates a ZIP archive payload with the standard export filename.
    pub fn zip(content_base64: impl Into<String>) -> Self {
        Self {
            filename: "images.zip".to_string(),
            content: content_base64.into(),
            mime_type: "application/zip".to_string(),
        }
    }
}
