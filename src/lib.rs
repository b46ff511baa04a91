//! # Lowlight Gallery
//!
//! Provisions a client photo-gallery delivery folder: a copy of the studio's
//! viewer-page template, the final images renamed to a clean sequence,
//! optional JPEG thumbnails, and a `manifest.json` the page renders from.
//!
//! # Architecture: One Linear Pass
//!
//! ```text
//! 1. Name       client + date + token  →  slug
//! 2. Scaffold   template/              →  <outroot>/<slug>/
//! 3. Ingest     source/*.{jpg,png,..}  →  full/001.jpg, 002.jpg, ...
//! 4. Thumbnail  full/NNN.jpg           →  thumbs/NNN.jpg      (optional)
//! 5. Manifest   entries + thumbs/      →  manifest.json
//! ```
//!
//! Each stage returns a `Result`; the first error ends the run and nothing
//! is rolled back. See [`pipeline::run`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`slug`] | Client-name normalization, slug assembly, injectable token source |
//! | [`scaffold`] | Template copy with the collision guard |
//! | [`ingest`] | Eligible-image listing and sequential full-set copy |
//! | [`imaging`] | Codec check, fit-within math, thumbnail backend |
//! | [`manifest`] | Manifest model and JSON emission |
//! | [`pipeline`] | Stage ordering and the [`pipeline::GalleryError`] taxonomy |
//! | [`config`] | Optional `studio.toml`: branding and thumbnail defaults |
//! | [`types`] | [`types::GalleryRequest`] and [`types::ImageEntry`] |
//! | [`output`] | CLI summary formatting |
//!
//! # Design Decisions
//!
//! ## Rename, Don't Transcode
//!
//! The full set is copied byte-for-byte under `NNN.jpg` names, whatever the
//! source format. Delivered files are the photographer's exports; re-encoding
//! them would cost quality. Browsers sniff image content, so a PNG served as
//! `.jpg` still displays.
//!
//! ## Thumbnails Are Discovered, Not Reported
//!
//! The manifest checks `thumbs/` on disk for each image rather than trusting
//! what the thumbnail stage said it wrote. The manifest always describes the
//! folder as it actually is.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, resizing and JPEG encoding use the `image` crate only. The binary
//! has no system image libraries to install.

pub mod config;
pub mod imaging;
pub mod ingest;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod scaffold;
pub mod slug;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
