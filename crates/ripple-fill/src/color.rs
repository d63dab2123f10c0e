//! Color decomposition and perceptual distance.
//!
//! Two colors are considered equivalent for fill purposes when the sum of
//! squared per-channel differences is at most `(tolerance * 2)²`. The
//! squared form avoids a square root in the traversal hot loop.

/// A packed 32-bit color in the engine's internal channel order: alpha in
/// bits 24..32, then blue, green, red in the low byte. This matches the
/// in-memory word of an RGBA8888 buffer on a little-endian host, so canvas
/// pixels are already in internal order and never need per-pixel conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Reorder a host packed-ARGB color into the internal layout.
    ///
    /// This is a lossless byte shuffle, not a color-space conversion.
    pub fn from_argb(argb: u32) -> Self {
        let a = (argb >> 24) & 0xFF;
        let r = (argb >> 16) & 0xFF;
        let g = (argb >> 8) & 0xFF;
        let b = argb & 0xFF;
        Self((a << 24) | (b << 16) | (g << 8) | r)
    }

    /// Reorder back into the host packed-ARGB convention.
    pub fn to_argb(self) -> u32 {
        let (a, r, g, b) = decompose(self);
        (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }
}

/// Extract the four 8-bit channels of an internal color as `(a, r, g, b)`.
pub fn decompose(color: Color) -> (u8, u8, u8, u8) {
    let c = color.0;
    let a = (c >> 24) as u8;
    let b = (c >> 16) as u8;
    let g = (c >> 8) as u8;
    let r = c as u8;
    (a, r, g, b)
}

/// Sum of squared per-channel differences between two packed colors.
///
/// The result is symmetric and zero iff the colors are bit-identical. It is
/// computed byte-wise on the packed words, so it gives the same answer for
/// any consistent channel packing; callers may pass internal or host-order
/// colors as long as both sides use the same packing. The maximum value is
/// `4 * 255² = 260 100`, which fits comfortably in the `u32` accumulator.
pub fn squared_distance(c1: Color, c2: Color) -> u32 {
    distance_words(c1.0, c2.0)
}

/// Squared-distance threshold for a caller-supplied tolerance.
///
/// Tolerance is bounded to 0..=255 by its type; the widest threshold is
/// `(255 * 2)² = 260 100`, which admits every color pair.
pub fn threshold(tolerance: u8) -> u32 {
    let t = u32::from(tolerance) * 2;
    t * t
}

/// Returns true iff `c1` and `c2` differ by more than the tolerance allows.
///
/// Operates directly on host-encoded colors; channel order does not affect
/// the distance as long as both colors use the same packing.
pub fn is_color_invalid(c1: u32, c2: u32, tolerance: u8) -> bool {
    distance_words(c1, c2) > threshold(tolerance)
}

fn distance_words(c1: u32, c2: u32) -> u32 {
    let mut sum = 0u32;
    for shift in [0u32, 8, 16, 24] {
        let d = ((c1 >> shift) & 0xFF) as i32 - ((c2 >> shift) & 0xFF) as i32;
        sum += (d * d) as u32;
    }
    sum
}
