//! Gallery manifest emission.
//!
//! The template's viewer page fetches `manifest.json` next to itself and
//! renders the grid, lightbox and "download all" ZIP from it:
//!
//! ```json
//! {
//!   "title": "Anna — Gallery",
//!   "subtitle": "Delivered 2026-01-19 · Lowlight Studio",
//!   "note": "These are your final edits. ...",
//!   "zipName": "anna-lowlight.zip",
//!   "openFolder": "./full/",
//!   "images": [
//!     { "url": "./full/001.jpg", "filename": "001.jpg", "thumb": "./thumbs/001.jpg" }
//!   ]
//! }
//! ```
//!
//! `thumb` is included only when the thumbnail file exists on disk at the
//! time the manifest is built.

use crate::config::StudioInfo;
use crate::imaging::thumbnail_path;
use crate::slug::normalize_name;
use crate::types::ImageEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the manifest inside a gallery folder.
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub title: String,
    pub subtitle: String,
    pub note: String,
    pub zip_name: String,
    pub open_folder: String,
    pub images: Vec<ManifestImage>,
}

/// One image as the viewer page sees it. Paths are relative to the
/// gallery folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub url: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

/// Describe the delivered gallery.
///
/// Thumbnails are looked up in `thumbs_dir` by file presence, so a run with
/// thumbnails disabled (or a thumbnail deleted by hand) simply omits the key.
pub fn build_manifest(
    client_name: &str,
    date: &str,
    entries: &[ImageEntry],
    thumbs_dir: &Path,
    studio: &StudioInfo,
) -> Manifest {
    let images = entries
        .iter()
        .map(|entry| {
            let thumb = thumbnail_path(&entry.full_path, thumbs_dir);
            ManifestImage {
                url: entry.url(),
                filename: entry.filename(),
                thumb: thumb.is_file().then(|| {
                    format!("./thumbs/{}", thumb.file_name().unwrap_or_default().to_string_lossy())
                }),
            }
        })
        .collect();

    Manifest {
        title: format!("{client_name} — Gallery"),
        subtitle: format!("Delivered {date} · {}", studio.name),
        note: studio.note.clone(),
        zip_name: format!("{}-{}.zip", normalize_name(client_name), studio.zip_suffix),
        open_folder: "./full/".to_string(),
        images,
    }
}

/// Write `manifest` as indented JSON to `<out_dir>/manifest.json`,
/// replacing any existing file (the template may ship a placeholder).
///
/// Non-ASCII text such as `—` and `·` is written as raw UTF-8, not as
/// `\u2014` escapes. Byte-level diffs against escaped output will differ
/// even though the parsed JSON is identical.
pub fn write_manifest(out_dir: &Path, manifest: &Manifest) -> Result<PathBuf, ManifestError> {
    let path = out_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json)?;
    Ok(path)
}
