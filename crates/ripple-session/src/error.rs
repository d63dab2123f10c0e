//! Error types for session lookup and stepped application.

use crate::registry::SequenceId;
use ripple_fill::FillError;

/// Errors that can occur while operating on registered fill sequences.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The identifier does not name a live sequence. Either it was never
    /// issued or the sequence has already been released.
    #[error("fill sequence not found: {0:?}")]
    SequenceNotFound(SequenceId),

    /// The canvas passed to `advance` does not have the dimensions the
    /// sequence was prepared against.
    #[error(
        "canvas is {actual_width}x{actual_height} but the sequence was \
         prepared on {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Canvas validation failed before the session layer was reached.
    #[error(transparent)]
    Fill(#[from] FillError),
}
