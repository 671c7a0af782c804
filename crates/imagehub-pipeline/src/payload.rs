//! Upload payload decoding and per-file validation steps.
//!
//! Uploaded content arrives as `"<header>,<base64 body>"` strings (the
//! data-URL convention). Each step here returns a validation error that
//! the pipeline converts into a per-file outcome; none is batch-fatal.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;

use imagehub_core::error::{AppError, ErrorKind};
use imagehub_core::result::AppResult;
use imagehub_core::types::formats::has_supported_extension;

/// Rejects filenames without a supported image extension.
pub fn check_extension(filename: &str) -> AppResult<()> {
    if has_supported_extension(filename) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Unsupported file type: {filename}"
        )))
    }
}

/// Splits a header-tagged payload on its first comma and decodes the
/// base64 body.
///
/// Fails when no comma is present, when the body is not valid base64, or
/// when the decoded content is empty.
pub fn decode_base64_payload(content: &str) -> AppResult<Bytes> {
    let Some((_, body)) = content.split_once(',') else {
        return Err(AppError::validation(
            "Failed to decode base64 image: input contains no comma to split header and data",
        ));
    };

    let decoded = BASE64.decode(body).map_err(|e| {
        AppError::validation(format!("Failed to decode base64 image: {e}"))
    })?;

    if decoded.is_empty() {
        return Err(AppError::validation(
            "Failed to decode base64 image: decoded image content is empty",
        ));
    }

    Ok(Bytes::from(decoded))
}

/// Verifies that decoded bytes parse as a structurally valid image.
///
/// Parsing is CPU-bound, so it runs on the blocking pool.
pub async fn validate_image_content(data: Bytes) -> AppResult<()> {
    tokio::task::spawn_blocking(move || {
        image::load_from_memory(&data)
            .map(|_| ())
            .map_err(|e| AppError::validation(format!("Invalid image content: {e}")))
    })
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Internal, "Image validation task panicked", e))?
}
