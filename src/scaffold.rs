//! Template scaffolding.
//!
//! Each gallery starts as a copy of the studio's template folder (the
//! viewer page, its scripts and styles). The destination must not exist:
//! slugs carry a random token, so a collision means the same token was
//! forced twice and the earlier delivery must not be overwritten.

use crate::ingest::preserve_times;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Template not found: {0}")]
    TemplateNotFound(PathBuf),
    #[error("Output already exists: {0}")]
    OutputExists(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to walk template: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Recursively copy `template` into a new directory at `target`.
///
/// Files keep their modification and access times. Symlinks inside the
/// template are followed and their targets copied as regular files.
pub fn copy_template(template: &Path, target: &Path) -> Result<(), ScaffoldError> {
    if !template.is_dir() {
        return Err(ScaffoldError::TemplateNotFound(template.to_path_buf()));
    }
    if target.exists() {
        return Err(ScaffoldError::OutputExists(target.to_path_buf()));
    }

    let mut copied = 0;
    for entry in WalkDir::new(template).follow_links(true) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(template)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        let dest = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &dest)?;
            preserve_times(entry.path(), &dest)?;
            copied += 1;
        }
    }

    tracing::debug!(
        template = %template.display(),
        target = %target.display(),
        files = copied,
        "scaffold copied"
    );
    Ok(())
}
