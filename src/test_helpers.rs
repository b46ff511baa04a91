//! Shared fixtures for the unit test suite.
//!
//! Every helper writes into a caller-supplied directory (normally a
//! `tempfile::TempDir`) so tests stay isolated from each other.

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Create `<root>/template` with a small viewer-page tree and return its path.
///
/// ```text
/// template/
/// ├── index.html
/// └── assets/
///     ├── gallery.js
///     └── css/site.css
/// ```
pub fn write_template(root: &Path) -> PathBuf {
    let template = root.join("template");
    fs::create_dir_all(template.join("assets/css")).unwrap();
    fs::write(template.join("index.html"), "<html>gallery</html>").unwrap();
    fs::write(template.join("assets/gallery.js"), "loadManifest();").unwrap();
    fs::write(template.join("assets/css/site.css"), "body{}").unwrap();
    template
}

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a valid JPEG of the given size.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    DynamicImage::ImageRgb8(gradient(width, height))
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
}

/// Write a valid RGBA PNG (half-transparent) of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 200, 128])
    });
    DynamicImage::ImageRgba8(img)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

/// Write placeholder bytes under each name; for tests that never decode.
pub fn write_placeholders(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), format!("bytes of {name}")).unwrap();
    }
}

/// Sorted file names directly under `dir`.
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
