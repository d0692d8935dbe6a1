//! Two color alternating pattern under a moving comet

use crate::color::{BLACK, Rgb, blend};
use crate::fade::fade_weight;
use crate::mode::{AnimationState, PatternPhase};

/// Render the duo pattern
///
/// Even pixels take the primary color in phase `A` and the secondary color
/// in phase `B`. Each pixel is then faded by its distance to the comet.
pub fn render_duo(state: &AnimationState, primary: Rgb, secondary: Rgb, width: f32, leds: &mut [Rgb]) {
    let len = leds.len();
    let primary_on_even = state.phase == PatternPhase::A;

    for (index, led) in leds.iter_mut().enumerate() {
        let base = if (index % 2 == 0) == primary_on_even {
            primary
        } else {
            secondary
        };
        let intensity = fade_weight(state.position, index, len, width);
        *led = blend(BLACK, base, intensity);
    }
}
