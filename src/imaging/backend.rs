//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the seam between thumbnail orchestration
//! and pixel work. Production uses
//! [`RustBackend`](super::rust_backend::RustBackend); tests use the
//! recording [`tests::MockBackend`].

use super::params::ThumbnailParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
    #[error(
        "Image codec unavailable: {0}. Rebuild with the image crate's jpeg, png and webp \
         features enabled, or rerun with --no-thumbs"
    )]
    CodecUnavailable(String),
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

pub trait ImageBackend {
    /// Fail early if the codecs needed for thumbnails are missing.
    fn check_codecs(&self) -> Result<(), BackendError>;

    /// Write a thumbnail and return its final dimensions.
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<Dimensions, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Mock backend that records operations without touching pixels.
    ///
    /// When `write_outputs` is set, `thumbnail` creates an empty file at the
    /// output path so existence checks downstream behave as in production.
    #[derive(Default)]
    pub struct MockBackend {
        pub missing_codec: Option<String>,
        pub write_outputs: bool,
        pub operations: RefCell<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        CheckCodecs,
        Thumbnail {
            source: String,
            output: String,
            max_size: u32,
            quality: u8,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn writing() -> Self {
            Self {
                write_outputs: true,
                ..Self::default()
            }
        }

        pub fn without_codec(name: &str) -> Self {
            Self {
                missing_codec: Some(name.to_string()),
                ..Self::default()
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.borrow().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn check_codecs(&self) -> Result<(), BackendError> {
            self.operations.borrow_mut().push(RecordedOp::CheckCodecs);
            match &self.missing_codec {
                Some(name) => Err(BackendError::CodecUnavailable(name.clone())),
                None => Ok(()),
            }
        }

        fn thumbnail(&self, params: &ThumbnailParams) -> Result<Dimensions, BackendError> {
            self.operations.borrow_mut().push(RecordedOp::Thumbnail {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                max_size: params.max_size,
                quality: params.quality.value(),
            });
            if self.write_outputs {
                std::fs::write(&params.output, b"")?;
            }
            Ok(Dimensions {
                width: params.max_size,
                height: params.max_size,
            })
        }
    }

    #[test]
    fn mock_records_thumbnail() {
        let backend = MockBackend::new();

        backend
            .thumbnail(&ThumbnailParams {
                source: "/full/001.jpg".into(),
                output: "/thumbs/001.jpg".into(),
                max_size: 1400,
                quality: super::super::params::Quality::new(82),
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Thumbnail {
                max_size: 1400,
                quality: 82,
                ..
            }
        ));
    }

    #[test]
    fn mock_reports_missing_codec() {
        let backend = MockBackend::without_codec("webp decoder");
        let err = backend.check_codecs().unwrap_err();
        assert!(err.to_string().contains("webp decoder"));
        assert!(err.to_string().contains("--no-thumbs"));
    }
}
