//! Supported image file extensions.

/// File extensions accepted by the upload pipeline and recognized when
/// listing a user's stored images. Matching is case-insensitive.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 5] = [".tif", ".tiff", ".png", ".jpg", ".jpeg"];

/// Returns true when the filename ends with a supported image extension,
/// ignoring case.
pub fn has_supported_extension(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    SUPPORTED_IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
}
