//! Shared types passed between pipeline stages.

use std::path::PathBuf;

/// Everything a single gallery run needs, resolved from the command line
/// and studio config. Not modified once the run starts.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryRequest {
    /// Client name as typed; used verbatim in the manifest title.
    pub client_name: String,
    pub source: PathBuf,
    pub template: PathBuf,
    /// Root folder that galleries are created under.
    pub outroot: PathBuf,
    /// Delivery date, `YYYY-MM-DD` by default but not validated.
    pub date: String,
    pub thumbnails: bool,
    /// Longest edge of a thumbnail in pixels.
    pub thumb_size: u32,
    /// JPEG quality 0-100.
    pub thumb_quality: u8,
    /// Overrides the random slug token.
    pub token: Option<String>,
}

/// One delivered image.
///
/// `number` is the 1-based position in the sorted source listing and is
/// also the file name in `full/` (`001.jpg`, `002.jpg`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry {
    pub number: u32,
    pub source_path: PathBuf,
    pub full_path: PathBuf,
}

impl ImageEntry {
    /// File name in `full/`, e.g. `007.jpg`.
    pub fn filename(&self) -> String {
        full_filename(self.number)
    }

    /// File stem shared by the full image and its thumbnail, e.g. `007`.
    pub fn stem(&self) -> String {
        format!("{:03}", self.number)
    }

    /// Gallery-relative URL of the full image.
    pub fn url(&self) -> String {
        format!("./full/{}", self.filename())
    }
}

/// Sequential name for the `number`th delivered image.
pub fn full_filename(number: u32) -> String {
    format!("{:03}.jpg", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_zero_padded() {
        assert_eq!(full_filename(1), "001.jpg");
        assert_eq!(full_filename(42), "042.jpg");
        assert_eq!(full_filename(999), "999.jpg");
    }

    #[test]
    fn filenames_grow_past_three_digits() {
        assert_eq!(full_filename(1000), "1000.jpg");
    }

    #[test]
    fn entry_paths_derive_from_number() {
        let entry = ImageEntry {
            number: 7,
            source_path: "src/IMG_0042.png".into(),
            full_path: "out/full/007.jpg".into(),
        };
        assert_eq!(entry.filename(), "007.jpg");
        assert_eq!(entry.stem(), "007");
        assert_eq!(entry.url(), "./full/007.jpg");
    }
}
