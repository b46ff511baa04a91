//! The delivery pipeline: name → scaffold → ingest → thumbnail → manifest.
//!
//! Stages run strictly in order and the first failure ends the run. Nothing
//! is rolled back: a failure after scaffolding leaves the gallery folder and
//! any images already copied in place.

use crate::config::StudioInfo;
use crate::imaging::{self, BackendError, ImageBackend, Quality, ThumbnailConfig};
use crate::ingest::{self, IngestError};
use crate::manifest::{self, ManifestError};
use crate::scaffold::{self, ScaffoldError};
use crate::slug::{self, TokenSource};
use crate::types::GalleryRequest;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a run can fail.
///
/// The first four variants are user errors with actionable messages; the
/// rest wrap whatever the filesystem or codec reported.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Template not found: {0}")]
    TemplateNotFound(PathBuf),
    #[error("Source folder not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("Output already exists: {0}")]
    OutputExists(PathBuf),
    #[error("No images found in source folder: {0}")]
    NoImages(PathBuf),
    #[error("{0}")]
    CodecUnavailable(BackendError),
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to copy template: {0}")]
    Scaffold(ScaffoldError),
    #[error("Image processing failed: {0}")]
    Imaging(BackendError),
    #[error("Failed to write manifest: {0}")]
    Manifest(#[from] ManifestError),
}

impl From<ScaffoldError> for GalleryError {
    fn from(err: ScaffoldError) -> Self {
        match err {
            ScaffoldError::TemplateNotFound(p) => Self::TemplateNotFound(p),
            ScaffoldError::OutputExists(p) => Self::OutputExists(p),
            other => Self::Scaffold(other),
        }
    }
}

impl From<IngestError> for GalleryError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::SourceNotFound(p) => Self::SourceNotFound(p),
            IngestError::Io(e) => Self::Io(e),
        }
    }
}

impl From<BackendError> for GalleryError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::CodecUnavailable(_) => Self::CodecUnavailable(err),
            other => Self::Imaging(other),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryOutcome {
    pub slug: String,
    pub out_dir: PathBuf,
    /// Public path of the gallery, e.g. `/c/anna-2026-01-19-2fefa5/`.
    pub url_path: String,
    pub manifest_path: PathBuf,
    pub image_count: usize,
    pub thumbnail_count: usize,
}

/// Public URL path for a gallery served under `prefix`.
pub fn gallery_url(prefix: &str, slug: &str) -> String {
    format!("{}/{}/", prefix.trim_end_matches('/'), slug)
}

/// Run the whole pipeline for one request.
pub fn run(
    request: &GalleryRequest,
    studio: &StudioInfo,
    tokens: &mut dyn TokenSource,
    backend: &impl ImageBackend,
) -> Result<GalleryOutcome, GalleryError> {
    if !request.template.exists() {
        return Err(GalleryError::TemplateNotFound(request.template.clone()));
    }
    if !request.source.exists() {
        return Err(GalleryError::SourceNotFound(request.source.clone()));
    }

    let token = slug::resolve_token(request.token.as_deref(), tokens);
    let slug = slug::build_slug(&request.client_name, &request.date, &token);
    let out_dir = request.outroot.join(&slug);
    tracing::debug!(%slug, out_dir = %out_dir.display(), "derived gallery slug");

    scaffold::copy_template(&request.template, &out_dir)?;

    let full_dir = out_dir.join("full");
    let thumbs_dir = out_dir.join("thumbs");
    fs::create_dir_all(&full_dir)?;
    fs::create_dir_all(&thumbs_dir)?;

    let images = ingest::list_images(&request.source)?;
    if images.is_empty() {
        return Err(GalleryError::NoImages(request.source.clone()));
    }
    tracing::debug!(count = images.len(), "found source images");

    let entries = ingest::copy_full_set(&images, &full_dir)?;

    if request.thumbnails {
        let config = ThumbnailConfig {
            max_size: request.thumb_size,
            quality: Quality::new(request.thumb_quality),
        };
        imaging::create_thumbnails(backend, &entries, &thumbs_dir, &config)?;
    } else {
        tracing::debug!("thumbnails disabled");
    }

    let manifest = manifest::build_manifest(
        &request.client_name,
        &request.date,
        &entries,
        &thumbs_dir,
        studio,
    );
    let manifest_path = manifest::write_manifest(&out_dir, &manifest)?;
    let thumbnail_count = manifest.images.iter().filter(|i| i.thumb.is_some()).count();

    Ok(GalleryOutcome {
        url_path: gallery_url(&studio.url_prefix, &slug),
        slug,
        out_dir,
        manifest_path,
        image_count: entries.len(),
        thumbnail_count,
    })
}
