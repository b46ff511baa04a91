//! Pure Rust thumbnail backend built on the `image` crate.
//!
//! | Step | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP) | `image::ImageReader` with content sniffing |
//! | Drop alpha | `DynamicImage::into_rgb8` |
//! | Resize | `image::imageops::resize` with `Lanczos3` |
//! | Encode | `jpeg_encoder::Encoder`, progressive with optimized Huffman tables |
//!
//! Decoding sniffs the file contents rather than trusting the extension,
//! because the full set stores PNG and WebP bytes under `.jpg` names.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::fit_within;
use super::params::ThumbnailParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
use jpeg_encoder::{ColorType, Encoder};
use std::path::Path;

/// Formats that must decode for every eligible source image.
const REQUIRED_DECODERS: &[(&str, ImageFormat)] = &[
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("webp", ImageFormat::WebP),
];

/// Name of the first codec thumbnails need that is not compiled in.
fn missing_codec() -> Option<String> {
    for (name, format) in REQUIRED_DECODERS {
        if !format.reading_enabled() {
            return Some(format!("{name} decoder"));
        }
    }
    None
}

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

fn encode_failed(path: &Path, reason: impl std::fmt::Display) -> BackendError {
    BackendError::ProcessingFailed(format!("JPEG encode failed for {}: {}", path.display(), reason))
}

/// Encode `img` as a progressive JPEG. JPEG frame dimensions are 16-bit.
fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<(), BackendError> {
    let (Ok(width), Ok(height)) = (u16::try_from(img.width()), u16::try_from(img.height())) else {
        return Err(encode_failed(
            path,
            format!("{}x{} exceeds the JPEG frame limit", img.width(), img.height()),
        ));
    };

    let mut encoder = Encoder::new_file(path, quality).map_err(|e| encode_failed(path, e))?;
    encoder.set_progressive(true);
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(img.as_raw(), width, height, ColorType::Rgb)
        .map_err(|e| encode_failed(path, e))
}

impl ImageBackend for RustBackend {
    fn check_codecs(&self) -> Result<(), BackendError> {
        match missing_codec() {
            Some(name) => Err(BackendError::CodecUnavailable(name)),
            None => Ok(()),
        }
    }

    fn thumbnail(&self, params: &ThumbnailParams) -> Result<Dimensions, BackendError> {
        let img = load_image(&params.source)?;
        let rgb = img.into_rgb8();

        let (width, height) = fit_within(rgb.dimensions(), params.max_size);
        let resized = if (width, height) == rgb.dimensions() {
            rgb
        } else {
            image::imageops::resize(&rgb, width, height, FilterType::Lanczos3)
        };

        save_jpeg(&resized, &params.output, params.quality.value())?;
        Ok(Dimensions { width, height })
    }
}
