//! Studio configuration.
//!
//! Branding and thumbnail defaults live in an optional `studio.toml`,
//! looked up in the output root unless `--config` points elsewhere:
//!
//! ```text
//! c/
//! ├── studio.toml                    # Studio config (optional)
//! ├── template/                      # Viewer page copied into each gallery
//! └── anna-2026-01-19-2fefa5/        # A delivered gallery
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [studio]
//! name = "Lowlight Studio"   # Shown in the manifest subtitle
//! note = "These are your final edits. ..."
//! zip_suffix = "lowlight"    # ZIP download name: {client}-{zip_suffix}.zip
//! url_prefix = "/c"          # Public path galleries are served under
//!
//! [thumbnails]
//! size = 1400                # Longest edge in pixels
//! quality = 82               # JPEG quality (0-100)
//! ```
//!
//! Unknown keys are rejected so typos surface instead of silently falling
//! back to defaults. Command-line thumbnail flags override the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the output root when `--config` is not given.
pub const CONFIG_FILE: &str = "studio.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Top-level studio configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    pub studio: StudioInfo,
    pub thumbnails: ThumbnailSettings,
}

/// Studio identity written into every manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioInfo {
    pub name: String,
    /// Message shown under the gallery title.
    pub note: String,
    pub zip_suffix: String,
    pub url_prefix: String,
}

impl Default for StudioInfo {
    fn default() -> Self {
        Self {
            name: "Lowlight Studio".to_string(),
            note: "These are your final edits. Please avoid heavy filters that significantly \
                   change the delivered look."
                .to_string(),
            zip_suffix: "lowlight".to_string(),
            url_prefix: "/c".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailSettings {
    pub size: u32,
    pub quality: u8,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            size: 1400,
            quality: 82,
        }
    }
}

impl StudioConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thumbnails.quality > 100 {
            return Err(ConfigError::Validation(
                "thumbnails.quality must be 0-100".into(),
            ));
        }
        if self.thumbnails.size == 0 {
            return Err(ConfigError::Validation(
                "thumbnails.size must be non-zero".into(),
            ));
        }
        if self.studio.zip_suffix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "studio.zip_suffix must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Where to look for the studio config: the explicit path, or
/// `studio.toml` in the output root.
pub fn config_path(explicit: Option<&Path>, outroot: &Path) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| outroot.join(CONFIG_FILE))
}

/// Load and validate the config at `path`. A missing file yields the stock
/// defaults.
pub fn load_config(path: &Path) -> Result<StudioConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no studio config, using defaults");
        return Ok(StudioConfig::default());
    }
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let config: StudioConfig = toml::from_str(&content)?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "loaded studio config");
    Ok(config)
}

/// A stock `studio.toml` with every option documented.
pub fn stock_config_toml() -> &'static str {
    r##"# Lowlight Gallery studio configuration
# ====================================
# All settings are optional. Remove or comment out any you don't need.
# Place this file at <outroot>/studio.toml or pass --config <path>.

[studio]
# Studio name, shown in each gallery's subtitle:
# "Delivered 2026-01-19 · Lowlight Studio"
name = "Lowlight Studio"

# Message displayed under the gallery title.
note = "These are your final edits. Please avoid heavy filters that significantly change the delivered look."

# The "download all" ZIP is named {client}-{zip_suffix}.zip
zip_suffix = "lowlight"

# Public path galleries are served under; used in the summary URL.
url_prefix = "/c"

[thumbnails]
# Longest edge of a thumbnail in pixels. Smaller images are not upscaled.
size = 1400

# JPEG quality (0-100). Overridden by --thumb-quality.
quality = 82
"##
}
