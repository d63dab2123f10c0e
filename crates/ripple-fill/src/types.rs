//! Core value types shared by the traversal and session layers.

use serde::{Deserialize, Serialize};

/// A pixel coordinate on a canvas.
///
/// Points produced by the traversal are always within the bounds of the
/// canvas they were discovered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Pixel layout of a host-supplied buffer.
///
/// Only [`PixelFormat::Rgba8888`] is supported by the engine; the other
/// variants exist so that callers can name the format they actually have
/// and get a precise rejection instead of silent corruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 4 bytes per pixel: Red, Green, Blue, Alpha. The one supported layout.
    Rgba8888,
    /// 2 bytes per pixel, 5-6-5 packed. Not supported.
    Rgb565,
    /// 1 byte per pixel, alpha only. Not supported.
    Alpha8,
}

/// One breadth-first depth ring of a fill region.
///
/// All points in a layer are reachable from the seed in the same number of
/// traversal steps. Layers are produced in ascending depth order and are
/// never empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Layer {
    /// Points in dequeue order within the ring.
    pub points: Vec<Point>,
}

impl Layer {
    /// Number of pixels in this ring.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
