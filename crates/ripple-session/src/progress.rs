//! Fixed-point progress reporting.
//!
//! Progress crosses the host boundary as basis points out of 10 000 so the
//! transport never carries a float. The division truncates, which keeps the
//! value bit-reproducible across platforms; 10 000 is only reported when
//! the fill is actually complete (or degenerately empty).

use serde::{Deserialize, Serialize};

/// Scale of the fixed-point progress fraction.
pub const PROGRESS_SCALE: u64 = 10_000;

/// Statistics returned from one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Overall completion as basis points in `0..=10_000`.
    pub progress_bp: u32,
    /// True once every layer has been applied.
    pub complete: bool,
    /// Pixels painted by this call only.
    pub pixels_filled: u64,
    /// Total number of layers in the sequence.
    pub total_layers: usize,
}

/// Truncating fixed-point fraction `filled / total`.
///
/// A sequence with zero total pixels is defined as fully complete.
pub fn basis_points(filled: u64, total: u64) -> u32 {
    if total == 0 {
        return PROGRESS_SCALE as u32;
    }
    (filled * PROGRESS_SCALE / total) as u32
}
