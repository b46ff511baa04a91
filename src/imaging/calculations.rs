//! Pure dimension math for thumbnails.

/// Fit `source` inside a `max` × `max` box, preserving aspect ratio.
///
/// Images already inside the box are returned unchanged (never upscaled).
/// Otherwise the longer edge becomes `max` and the shorter edge is rounded
/// to the nearest pixel, never below 1.
///
/// ```
/// # use lowlight_gallery::imaging::fit_within;
/// assert_eq!(fit_within((4000, 3000), 1400), (1400, 1050));
/// assert_eq!(fit_within((3000, 4000), 1400), (1050, 1400));
/// assert_eq!(fit_within((800, 600), 1400), (800, 600));
/// ```
pub fn fit_within(source: (u32, u32), max: u32) -> (u32, u32) {
    let (w, h) = source;
    if w <= max && h <= max {
        return (w, h);
    }

    let scale_side = |side: u32, longer: u32| -> u32 {
        ((side as f64 * max as f64 / longer as f64).round() as u32).max(1)
    };

    if w >= h {
        (max, scale_side(h, w))
    } else {
        (scale_side(w, h), max)
    }
}
