//! Comet fade profile
//!
//! A smooth bell-shaped highlight around a moving position on a ring of
//! pixels. Distances wrap at the seam, so the highlight flows from the last
//! pixel back to the first without a jump.

/// Default width of the bell curve
pub const DEFAULT_FADE_WIDTH: f32 = 2.0;

/// Circular distance between a position and a pixel on a ring of `len` pixels
#[allow(clippy::cast_precision_loss)]
pub fn ring_distance(position: f32, pixel: usize, len: usize) -> f32 {
    let len = len as f32;
    let distance = libm::fabsf(position - pixel as f32);
    if distance > len / 2.0 {
        len - distance
    } else {
        distance
    }
}

/// Intensity (`0.0..=1.0`) of `pixel` for a highlight centered at `position`
///
/// Computes `exp(-distance² / width)` over the circular distance.
/// A non-positive or NaN width collapses the highlight to a single pixel.
#[allow(clippy::float_cmp)]
pub fn fade_weight(position: f32, pixel: usize, len: usize, width: f32) -> f32 {
    let distance = ring_distance(position, pixel, len);
    if width.is_nan() || width <= 0.0 {
        return if distance == 0.0 { 1.0 } else { 0.0 };
    }

    let value = libm::expf(-(distance * distance) / width);
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
