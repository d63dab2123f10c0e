//! A single in-progress layered fill.

use ripple_fill::{Canvas, Color, Layer};

use crate::progress::{self, ProgressReport};

/// One registered progressive fill.
///
/// Owns the precomputed depth rings, the resolved fill color, the canvas
/// dimensions captured at preparation time, and a cursor over the rings.
/// Invariants: `current_layer <= layers.len()`, `filled_pixels` equals the
/// summed size of the first `current_layer` rings, and `total_pixels` is
/// fixed at creation.
#[derive(Debug)]
pub struct FillSequence {
    layers: Vec<Layer>,
    fill_color: Color,
    width: u32,
    height: u32,
    current_layer: usize,
    total_pixels: u64,
    filled_pixels: u64,
}

impl FillSequence {
    /// Build a sequence from discovered rings.
    pub fn new(layers: Vec<Layer>, fill_color: Color, width: u32, height: u32) -> Self {
        let total_pixels = layers.iter().map(|l| l.len() as u64).sum();
        Self {
            layers,
            fill_color,
            width,
            height,
            current_layer: 0,
            total_pixels,
            filled_pixels: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn total_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn total_pixels(&self) -> u64 {
        self.total_pixels
    }

    pub fn filled_pixels(&self) -> u64 {
        self.filled_pixels
    }

    pub fn is_complete(&self) -> bool {
        self.current_layer >= self.layers.len()
    }

    /// Paint up to `layer_count` further rings onto `canvas`.
    ///
    /// The count is clamped to the remaining rings; zero is a valid no-op.
    /// Returns the number of pixels painted by this call.
    pub(crate) fn apply_next(&mut self, canvas: &mut Canvas, layer_count: usize) -> u64 {
        let end = self
            .layers
            .len()
            .min(self.current_layer.saturating_add(layer_count));
        let mut painted = 0u64;
        for layer in &self.layers[self.current_layer..end] {
            for &p in &layer.points {
                canvas.paint(p, self.fill_color);
            }
            painted += layer.len() as u64;
        }
        self.current_layer = end;
        self.filled_pixels += painted;
        painted
    }

    /// Build the report for a call that painted `pixels_this_call` pixels.
    pub(crate) fn report(&self, pixels_this_call: u64) -> ProgressReport {
        ProgressReport {
            progress_bp: progress::basis_points(self.filled_pixels, self.total_pixels),
            complete: self.is_complete(),
            pixels_filled: pixels_this_call,
            total_layers: self.layers.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_fill::{PixelFormat, Point};

    /// Rings of sizes 1, 4, 3 laid out on a 4x2 canvas.
    fn sample_sequence() -> FillSequence {
        let mut points = (0..2u32).flat_map(|y| (0..4u32).map(move |x| Point::new(x, y)));
        let mut ring = |n: usize| Layer {
            points: points.by_ref().take(n).collect(),
        };
        let layers = vec![ring(1), ring(4), ring(3)];
        FillSequence::new(layers, Color::from_argb(0xFFFF0000), 4, 2)
    }

    #[test]
    fn test_totals_fixed_at_creation() {
        let seq = sample_sequence();
        assert_eq!(seq.total_pixels(), 8);
        assert_eq!(seq.total_layers(), 3);
        assert_eq!(seq.filled_pixels(), 0);
        assert!(!seq.is_complete());
    }

    #[test]
    fn test_stepped_application() {
        let mut seq = sample_sequence();
        let mut pixels = vec![0u32; 8];
        let mut canvas = Canvas::new(&mut pixels, 4, 2, PixelFormat::Rgba8888).unwrap();

        let painted = seq.apply_next(&mut canvas, 2);
        assert_eq!(painted, 5);
        let report = seq.report(painted);
        assert_eq!(report.progress_bp, 6250);
        assert!(!report.complete);
        assert_eq!(report.pixels_filled, 5);
        assert_eq!(report.total_layers, 3);

        // Requesting more rings than remain simply finishes the fill.
        let painted = seq.apply_next(&mut canvas, 5);
        assert_eq!(painted, 3);
        let report = seq.report(painted);
        assert_eq!(report.progress_bp, 10_000);
        assert!(report.complete);
        assert_eq!(seq.filled_pixels(), seq.total_pixels());

        drop(canvas);
        assert!(pixels.iter().all(|&p| p == 0xFF0000FF));
    }

    #[test]
    fn test_zero_count_is_a_noop() {
        let mut seq = sample_sequence();
        let mut pixels = vec![0u32; 8];
        let mut canvas = Canvas::new(&mut pixels, 4, 2, PixelFormat::Rgba8888).unwrap();

        let painted = seq.apply_next(&mut canvas, 0);
        assert_eq!(painted, 0);
        assert_eq!(seq.filled_pixels(), 0);
        let report = seq.report(painted);
        assert_eq!(report.progress_bp, 0);
        assert_eq!(report.pixels_filled, 0);
        assert_eq!(report.total_layers, 3);

        drop(canvas);
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_advancing_past_the_end() {
        let mut seq = sample_sequence();
        let mut pixels = vec![0u32; 8];
        let mut canvas = Canvas::new(&mut pixels, 4, 2, PixelFormat::Rgba8888).unwrap();

        seq.apply_next(&mut canvas, 100);
        assert!(seq.is_complete());
        assert_eq!(seq.apply_next(&mut canvas, 1), 0);
        assert_eq!(seq.report(0).progress_bp, 10_000);
    }

    #[test]
    fn test_empty_sequence_reports_complete() {
        let seq = FillSequence::new(Vec::new(), Color::from_argb(0), 1, 1);
        assert!(seq.is_complete());
        assert_eq!(seq.report(0).progress_bp, 10_000);
    }
}
