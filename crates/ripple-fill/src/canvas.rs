//! Scoped, validated access to a host pixel buffer.
//!
//! [`Canvas`] is the boundary between the host's raw memory and the
//! traversal engine. Construction performs all format and size validation
//! up front; once a `Canvas` exists, the engine can index it without
//! re-checking. The exclusive `&mut` borrow is the access scope: it cannot
//! outlive the call that created it, and it is released on every exit path.

use crate::color::Color;
use crate::error::FillError;
use crate::types::{PixelFormat, Point};

/// A borrowed, row-major view over a 32-bit RGBA pixel buffer.
#[derive(Debug)]
pub struct Canvas<'a> {
    pixels: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// Wrap a host buffer, validating its layout before any traversal.
    ///
    /// Fails if `format` is not [`PixelFormat::Rgba8888`] or the slice
    /// length does not equal `width * height`.
    pub fn new(
        pixels: &'a mut [u32],
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Self, FillError> {
        if format != PixelFormat::Rgba8888 {
            return Err(FillError::UnsupportedFormat(format));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(FillError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Validate a host-supplied seed coordinate.
    ///
    /// The traversal itself never re-checks bounds; a seed must pass
    /// through here first. Signed inputs let a host pass its native
    /// coordinates through unchanged and get a precise rejection for
    /// negative values.
    pub fn seed(&self, x: i64, y: i64) -> Result<Point, FillError> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return Err(FillError::SeedOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(Point::new(x as u32, y as u32))
    }

    /// Linear index of an in-bounds point.
    pub(crate) fn index(&self, p: Point) -> usize {
        debug_assert!(p.x < self.width && p.y < self.height);
        p.y as usize * self.width as usize + p.x as usize
    }

    /// Read the color at an in-bounds point.
    pub fn color_at(&self, p: Point) -> Color {
        Color(self.pixels[self.index(p)])
    }

    /// Write a color at an in-bounds point.
    pub fn paint(&mut self, p: Point, color: Color) {
        let idx = self.index(p);
        self.pixels[idx] = color.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unsupported_format() {
        let mut pixels = vec![0u32; 4];
        let result = Canvas::new(&mut pixels, 2, 2, PixelFormat::Rgb565);
        assert!(matches!(result, Err(FillError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_rejects_size_mismatch() {
        let mut pixels = vec![0u32; 3];
        let result = Canvas::new(&mut pixels, 2, 2, PixelFormat::Rgba8888);
        assert!(matches!(
            result,
            Err(FillError::BufferSizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_seed_bounds() {
        let mut pixels = vec![0u32; 4];
        let canvas = Canvas::new(&mut pixels, 2, 2, PixelFormat::Rgba8888).unwrap();
        assert_eq!(canvas.seed(1, 1).unwrap(), Point::new(1, 1));
        assert!(matches!(
            canvas.seed(-1, 0),
            Err(FillError::SeedOutOfBounds { .. })
        ));
        assert!(matches!(
            canvas.seed(2, 0),
            Err(FillError::SeedOutOfBounds { .. })
        ));
        assert!(matches!(
            canvas.seed(0, 2),
            Err(FillError::SeedOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_paint_and_read_back() {
        let mut pixels = vec![0u32; 4];
        let mut canvas = Canvas::new(&mut pixels, 2, 2, PixelFormat::Rgba8888).unwrap();
        let p = Point::new(1, 0);
        canvas.paint(p, Color(0xFF0000FF));
        assert_eq!(canvas.color_at(p), Color(0xFF0000FF));
        drop(canvas);
        assert_eq!(pixels, vec![0, 0xFF0000FF, 0, 0]);
    }
}
