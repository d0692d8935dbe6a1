//! Rotating rainbow

use crate::color::{Rgb, wheel};

/// Wheel position of a pixel
///
/// The strip spans the whole wheel once, shifted by `offset`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn rainbow_position(index: usize, len: usize, offset: u8) -> i32 {
    if len == 0 {
        return i32::from(offset);
    }
    let base = (index * 256 / len) as i32;
    (base + i32::from(offset)) % 256
}

/// Render the rainbow, no comet fade is applied
pub fn render_rainbow(offset: u8, leds: &mut [Rgb]) {
    let len = leds.len();
    for (index, led) in leds.iter_mut().enumerate() {
        *led = wheel(rainbow_position(index, len, offset));
    }
}
