//! Frame pacing helpers for animated fills.
//!
//! A host animating a progressive fill typically wants the whole region
//! painted over a fixed duration, one `advance` per frame. These helpers
//! turn a duration and frame interval into a per-step layer count, and
//! guard against seeding a fill on a protected color (e.g. the black
//! outlines of a coloring page).

use std::time::Duration;

use ripple_fill::is_color_invalid;

/// Default fill tolerance for host callers that do not supply one.
pub const DEFAULT_TOLERANCE: u8 = 112;

/// Default total animation duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Default frame interval (~60 fps).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Number of layers to apply per frame so that `total_layers` rings finish
/// in roughly `duration` at one step per `interval`.
///
/// Always at least 1, so a fill makes progress even when the duration is
/// shorter than a single frame.
pub fn layers_per_step(total_layers: usize, duration: Duration, interval: Duration) -> usize {
    let intervals = (duration.as_millis() / interval.as_millis().max(1)).max(1) as usize;
    total_layers.div_ceil(intervals).max(1)
}

/// Returns true if the seed color matches any protected color within the
/// tolerance, meaning the fill should be skipped entirely.
///
/// Colors use the host packed-ARGB convention on both sides.
pub fn seed_is_protected(seed_argb: u32, protected: &[u32], tolerance: u8) -> bool {
    protected
        .iter()
        .any(|&color| !is_color_invalid(seed_argb, color, tolerance))
}
