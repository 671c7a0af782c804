//! TIFF transcoding and in-memory ZIP archive assembly.

use std::io::{Cursor, Write};

use bytes::Bytes;
use image::{DynamicImage, ImageFormat};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use imagehub_core::error::{AppError, ErrorKind};
use imagehub_core::result::AppResult;

/// Lossless TIFF encoding of raster images.
#[derive(Debug)]
pub struct TiffEncoder;

impl TiffEncoder {
    /// Encodes a decoded raster image as TIFF bytes.
    pub fn encode(image: &DynamicImage) -> AppResult<Bytes> {
        let mut buf = Cursor::new(Vec::new());
        image
            .write_to(&mut buf, ImageFormat::Tiff)
            .map_err(|e| AppError::archive(format!("Failed to encode TIFF image: {e}")))?;
        Ok(Bytes::from(buf.into_inner()))
    }

    /// Decodes stored image bytes and re-encodes them as TIFF.
    ///
    /// Both steps are CPU-bound and run on the blocking pool.
    pub async fn transcode(data: Bytes) -> AppResult<Bytes> {
        tokio::task::spawn_blocking(move || {
            let image = image::load_from_memory(&data)
                .map_err(|e| AppError::archive(format!("Failed to decode stored image: {e}")))?;
            Self::encode(&image)
        })
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Transcode task panicked", e))?
    }
}

/// Assembles a set of encoded images into one compressed ZIP buffer.
///
/// Entries are named `"<index>.tif"` from 0 in input order, bytes stored
/// verbatim. Any failure aborts the whole build; a partial archive is
/// never returned. Empty input yields a valid zero-entry archive.
#[derive(Debug)]
pub struct ArchiveBuilder;

impl ArchiveBuilder {
    /// Builds the archive on the blocking pool.
    pub async fn build(entries: Vec<Bytes>) -> AppResult<Bytes> {
        tokio::task::spawn_blocking(move || Self::build_sync(&entries))
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Archive build task panicked", e)
            })?
    }

    fn build_sync(entries: &[Bytes]) -> AppResult<Bytes> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (index, data) in entries.iter().enumerate() {
            writer
                .start_file(format!("{index}.tif"), options)
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Archive,
                        format!("Failed to start archive entry {index}.tif"),
                        e,
                    )
                })?;
            writer.write_all(data).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Archive,
                    format!("Failed to write archive entry {index}.tif"),
                    e,
                )
            })?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Archive, "Failed to finalize archive", e)
            })?;
        Ok(Bytes::from(cursor.into_inner()))
    }
}
