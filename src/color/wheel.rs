use crate::color::{BLACK, Rgb};

/// Width of one band of the color wheel
const BAND: i32 = 85;

/// Rainbow color wheel
///
/// Maps `0..=255` onto three bands: red to green, green to blue and
/// blue back to red, with a linear ramp inside every band.
/// Positions outside `0..=255` are black, callers wrap with `% 256`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn wheel(pos: i32) -> Rgb {
    if !(0..=255).contains(&pos) {
        return BLACK;
    }
    if pos < BAND {
        let ramp = (pos * 3) as u8;
        Rgb::new(255 - ramp, ramp, 0)
    } else if pos < BAND * 2 {
        let ramp = ((pos - BAND) * 3) as u8;
        Rgb::new(0, 255 - ramp, ramp)
    } else {
        let ramp = ((pos - BAND * 2) * 3) as u8;
        Rgb::new(ramp, 0, 255 - ramp)
    }
}
