//! High-level thumbnail operations.
//!
//! Combines the copied full set with thumbnail settings and drives the
//! backend one image at a time.

use super::backend::{BackendError, ImageBackend};
use super::params::{Quality, ThumbnailParams};
use crate::types::ImageEntry;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Configuration for thumbnail generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailConfig {
    /// Longest edge in pixels.
    pub max_size: u32,
    pub quality: Quality,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            max_size: 1400,
            quality: Quality::default(),
        }
    }
}

/// Path of the thumbnail for the full image at `full_path`.
///
/// `full/007.jpg` → `<thumbs_dir>/007.jpg`
pub fn thumbnail_path(full_path: &Path, thumbs_dir: &Path) -> PathBuf {
    let stem = full_path.file_stem().unwrap_or_default();
    thumbs_dir.join(stem).with_extension("jpg")
}

/// Plan a thumbnail operation without executing it.
pub fn plan_thumbnail(entry: &ImageEntry, thumbs_dir: &Path, config: &ThumbnailConfig) -> ThumbnailParams {
    ThumbnailParams {
        source: entry.full_path.clone(),
        output: thumbnail_path(&entry.full_path, thumbs_dir),
        max_size: config.max_size,
        quality: config.quality,
    }
}

/// Create a thumbnail for every entry, in order.
///
/// Codec availability is checked once before the first image. The first
/// failing image aborts the batch; thumbnails already written stay on disk.
pub fn create_thumbnails(
    backend: &impl ImageBackend,
    entries: &[ImageEntry],
    thumbs_dir: &Path,
    config: &ThumbnailConfig,
) -> Result<Vec<PathBuf>> {
    backend.check_codecs()?;

    let mut written = Vec::with_capacity(entries.len());
    for entry in entries {
        let params = plan_thumbnail(entry, thumbs_dir, config);
        let dims = backend.thumbnail(&params)?;
        tracing::debug!(
            output = %params.output.display(),
            width = dims.width,
            height = dims.height,
            "thumbnail written"
        );
        written.push(params.output);
    }
    Ok(written)
}
