//! Flood-fill engine for raw 32-bit pixel buffers.
//!
//! This crate provides the traversal half of the ripple fill engine. It
//! operates on a borrowed, mutable pixel buffer and knows nothing about how
//! that buffer was obtained or how it is displayed:
//!
//! - **Color model**: channel decomposition, squared Euclidean distance,
//!   tolerance-to-threshold mapping
//! - **Canvas**: a validated, scoped view over a raw `&mut [u32]` buffer
//! - **Traversal**: 8-connected breadth-first fill, either eager (paints as
//!   it visits) or layered (records BFS depth rings for deferred painting)
//!
//! # Architecture
//!
//! ```text
//! host pixel buffer (&mut [u32] + dimensions + format)
//!     │
//!     ▼
//! Canvas::new()          ← validate format and size, scope the borrow
//! Canvas::seed()         ← validate the seed coordinate
//!     │
//!     ▼
//! fill::flood_fill()     ← eager: paint the region in one pass
//! fill::discover_layers()← layered: record rings, leave the buffer untouched
//! ```
//!
//! # Pixel format
//!
//! The only supported buffer layout is RGBA8888: four 8-bit channels per
//! pixel, red in the low byte of each `u32` word. Colors crossing the API
//! boundary (fill targets, comparison colors) use the host's packed ARGB
//! convention and are reordered once per operation by [`Color::from_argb`].
//! Any other buffer format is rejected before traversal begins.

pub mod canvas;
pub mod color;
pub mod error;
pub mod fill;
pub mod types;

// Re-export primary types for convenience.
pub use canvas::Canvas;
pub use color::{is_color_invalid, Color};
pub use error::FillError;
pub use fill::{discover_layers, flood_fill, Discovery};
pub use types::{Layer, PixelFormat, Point};
