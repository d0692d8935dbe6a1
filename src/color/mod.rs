mod signal;
mod wheel;

pub use signal::{DEFAULT_SIGNAL_PALETTE, SIGNAL_LEVELS, SignalPalette, signal_to_color, signal_to_index};
use smart_leds::RGB8;
pub use wheel::wheel;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0.0 = all a, 1.0 = all b)
///
/// Every channel is computed as `a * (1 - t) + b * t` and truncated.
/// The factor is clamped to `0.0..=1.0`, NaN counts as 0.
#[inline]
pub fn blend(a: Rgb, b: Rgb, amount_of_b: f32) -> Rgb {
    let t = if amount_of_b.is_nan() {
        0.0
    } else {
        amount_of_b.clamp(0.0, 1.0)
    };
    Rgb {
        r: blend_channel(a.r, b.r, t),
        g: blend_channel(a.g, b.g, t),
        b: blend_channel(a.b, b.b, t),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(a: u8, b: u8, t: f32) -> u8 {
    let value = f32::from(a) * (1.0 - t) + f32::from(b) * t;
    value.clamp(0.0, 255.0) as u8
}
