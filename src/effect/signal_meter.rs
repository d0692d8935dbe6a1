//! Wi-Fi signal meter layouts

use crate::color::{BLACK, Rgb, SignalPalette};
use crate::scan::NetworkObservation;

/// One pixel per network, strongest first
///
/// Pixels without a network are off.
pub fn render_signal_list(networks: &[NetworkObservation], palette: &SignalPalette, leds: &mut [Rgb]) {
    leds.fill(BLACK);
    for (led, network) in leds.iter_mut().zip(networks) {
        *led = palette.color_for(network.rssi);
    }
}

/// Bar graph of the strongest network
///
/// Lights pixels `0..=level` with the palette colors of their level.
/// Everything is off when no network was found.
pub fn render_signal_bar(strongest: Option<&NetworkObservation>, palette: &SignalPalette, leds: &mut [Rgb]) {
    leds.fill(BLACK);
    let Some(network) = strongest else {
        return;
    };
    let level = palette.index_for(network.rssi);
    for (index, led) in leds.iter_mut().enumerate().take(level + 1) {
        *led = palette.level_color(index);
    }
}
