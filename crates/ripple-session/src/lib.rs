//! Progressive fill sessions for the ripple engine.
//!
//! A progressive fill precomputes its region as BFS depth rings (see
//! `ripple-fill`) and then applies them a few at a time, so a host can
//! animate the fill across frames. This crate owns the stateful half of
//! that workflow:
//!
//! - **Sequence**: one in-progress layered fill with a cursor and running
//!   totals
//! - **Registry**: process-wide store mapping opaque [`SequenceId`]s to
//!   sequences, safe under concurrent callers
//! - **Progress**: per-step statistics returned to the caller in fixed
//!   point (basis points out of 10 000)
//! - **Pacing**: helpers for choosing how many rings to apply per frame
//!
//! # Workflow
//!
//! ```text
//! SequenceRegistry::prepare()   ← discover rings, register a session
//!     │                            (or report AlreadyFilled)
//!     ▼
//! SequenceRegistry::advance()   ← paint the next N rings, report progress
//!     │   ... repeated until the report says complete ...
//!     ▼
//! SequenceRegistry::release()   ← idempotent disposal
//! ```
//!
//! The registry never hands out references to a sequence; sessions are
//! addressed by identifier only, and the registry is the single owner of
//! their lifetime. Sessions are never expired implicitly: a caller that
//! forgets to release keeps the sequence alive for the life of the process.

pub mod error;
pub mod pacing;
pub mod progress;
pub mod registry;
pub mod sequence;

// Re-export primary types for convenience.
pub use error::SessionError;
pub use progress::ProgressReport;
pub use registry::{PrepareOutcome, SequenceId, SequenceRegistry};
pub use sequence::FillSequence;
