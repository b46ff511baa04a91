//! Thumbnail generation in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Codec check** | `ImageFormat::reading_enabled` |
//! | **Fit** | [`fit_within`] (no upscaling) |
//! | **Thumbnail** | Lanczos3 resize + progressive `jpeg_encoder::Encoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Batch thumbnailing over the copied full set

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::fit_within;
pub use operations::{ThumbnailConfig, create_thumbnails, thumbnail_path};
pub use params::{Quality, ThumbnailParams};
pub use rust_backend::RustBackend;
