//! CLI output formatting.
//!
//! Each message has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes it. Format functions do
//! no I/O.
//!
//! ```text
//! Gallery created:
//!    Folder: c/anna-2026-01-19-2fefa5
//!    URL:    /c/anna-2026-01-19-2fefa5/
//!    Images: 12 (12 thumbnails)
//! Next: commit and push the gallery folder
//! ```

use crate::pipeline::GalleryOutcome;

/// Indentation for detail lines under a heading.
const DETAIL: &str = "   ";

/// Normalize a path for display with forward slashes on every platform.
fn display_path(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn images_line(outcome: &GalleryOutcome) -> String {
    match outcome.thumbnail_count {
        0 => format!("{DETAIL}Images: {} (no thumbnails)", outcome.image_count),
        n => format!("{DETAIL}Images: {} ({} thumbnails)", outcome.image_count, n),
    }
}

/// Summary printed after a successful run.
pub fn format_summary(outcome: &GalleryOutcome) -> Vec<String> {
    vec![
        "Gallery created:".to_string(),
        format!("{DETAIL}Folder: {}", display_path(&outcome.out_dir)),
        format!("{DETAIL}URL:    {}", outcome.url_path),
        images_line(outcome),
        "Next: commit and push the gallery folder".to_string(),
    ]
}

pub fn print_summary(outcome: &GalleryOutcome) {
    for line in format_summary(outcome) {
        println!("{}", line);
    }
}

/// One-line failure message for stderr.
pub fn format_error(err: &dyn std::error::Error) -> String {
    format!("error: {err}")
}
