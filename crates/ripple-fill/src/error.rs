//! Error types for canvas validation and traversal setup.

use crate::types::PixelFormat;

/// Errors that can occur before a traversal touches the buffer.
///
/// Every variant is surfaced before any pixel is written, so a failed call
/// never leaves a partially mutated buffer behind.
#[derive(Debug, thiserror::Error)]
pub enum FillError {
    /// The buffer does not use the one supported 32-bit RGBA layout.
    #[error("unsupported pixel format: {0:?}")]
    UnsupportedFormat(PixelFormat),

    /// The pixel slice does not match the declared dimensions.
    #[error("pixel buffer holds {actual} words but {expected} were declared")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// The seed coordinate lies outside the canvas.
    #[error("seed ({x}, {y}) outside canvas {width}x{height}")]
    SeedOutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
}
