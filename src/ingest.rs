//! Source listing and full-set copying.
//!
//! The delivered set is renamed to plain sequence numbers so the viewer page
//! and the ZIP download never expose camera or export file names:
//!
//! ```text
//! source/                 out/full/
//! ├── a.png         →     ├── 001.jpg
//! ├── b.webp        →     ├── 002.jpg
//! ├── c.jpg         →     └── 003.jpg
//! └── notes.txt           (ignored)
//! ```
//!
//! Numbering follows byte-wise file name order. Files are copied as-is:
//! the extension becomes `.jpg` but the bytes are not transcoded.

use crate::types::{ImageEntry, full_filename};
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Source folder not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extensions accepted as deliverable images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

fn is_eligible(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|x| ext.eq_ignore_ascii_case(x)))
}

/// List eligible images directly inside `source`, sorted by file name.
///
/// Subdirectories are not descended into. An empty result is not an error
/// here; the pipeline decides what to do with it.
pub fn list_images(source: &Path) -> Result<Vec<PathBuf>, IngestError> {
    if !source.is_dir() {
        return Err(IngestError::SourceNotFound(source.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(source)? {
        let path = entry?.path();
        if path.is_file() && is_eligible(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Copy `images` into `full_dir` as `001.jpg`, `002.jpg`, ...
///
/// Permissions and access/modification times are carried over where the
/// platform allows it.
pub fn copy_full_set(images: &[PathBuf], full_dir: &Path) -> Result<Vec<ImageEntry>, IngestError> {
    let mut entries = Vec::with_capacity(images.len());

    for (number, source) in (1u32..).zip(images) {
        let dest = full_dir.join(full_filename(number));
        fs::copy(source, &dest)?;
        preserve_times(source, &dest)?;
        tracing::debug!(
            source = %source.display(),
            dest = %dest.display(),
            "copied full image"
        );
        entries.push(ImageEntry {
            number,
            source_path: source.clone(),
            full_path: dest,
        });
    }

    Ok(entries)
}

/// Carry the modification and access times of `source` over to `dest`.
pub(crate) fn preserve_times(source: &Path, dest: &Path) -> std::io::Result<()> {
    let meta = fs::metadata(source)?;
    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    File::options().write(true).open(dest)?.set_times(times)
}
