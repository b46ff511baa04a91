//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how*. The
//! [`operations`](super::operations) module fills them in and the
//! [`backend`](super::backend) does the pixel work.

use std::path::PathBuf;

/// JPEG encoding quality.
///
/// The command line accepts 0–100; the encoder needs 1–100, so values are
/// clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(82)
    }
}

/// Parameters for a single thumbnail: decode `source`, shrink to fit inside
/// a `max_size` square, write a JPEG to `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub max_size: u32,
    pub quality: Quality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_encoder_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(82).value(), 82);
        assert_eq!(Quality::new(255).value(), 100);
    }

    #[test]
    fn quality_default_is_82() {
        assert_eq!(Quality::default().value(), 82);
    }
}
