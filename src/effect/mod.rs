//! Per-mode frame rendering
//!
//! Every effect is a pure function of the animation state (and the scan
//! cache for the signal meter). The whole frame is rebuilt on every call.

mod duo;
mod rainbow;
mod signal_meter;

pub use duo::render_duo;
pub use rainbow::{rainbow_position, render_rainbow};
pub use signal_meter::{render_signal_bar, render_signal_list};

use crate::color::{Rgb, SignalPalette};
use crate::config::{AnimationConfig, MeterStyle};
use crate::mode::{AnimationState, DisplayMode};
use crate::scan::ScanState;

/// Parameters the effects need from the configuration
#[derive(Debug, Clone, Copy)]
pub struct EffectParams {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub secondary_alt: Rgb,
    pub fade_width: f32,
    pub meter_style: MeterStyle,
    pub palette: SignalPalette,
}

impl EffectParams {
    pub const fn new(animation: &AnimationConfig, meter_style: MeterStyle, palette: SignalPalette) -> Self {
        Self {
            primary: animation.primary,
            secondary: animation.secondary,
            secondary_alt: animation.secondary_alt,
            fade_width: animation.fade_width,
            meter_style,
            palette,
        }
    }
}

/// Render one frame for the current mode
pub fn render(state: &AnimationState, scan: &ScanState, params: &EffectParams, leds: &mut [Rgb]) {
    match state.mode {
        DisplayMode::CyclicDuo => {
            render_duo(state, params.primary, params.secondary, params.fade_width, leds);
        }
        DisplayMode::CyclicDuoAlt => {
            render_duo(state, params.primary, params.secondary_alt, params.fade_width, leds);
        }
        DisplayMode::Rainbow => render_rainbow(state.rainbow_offset, leds),
        DisplayMode::SignalMeter => match params.meter_style {
            MeterStyle::List => render_signal_list(scan.observations(), &params.palette, leds),
            MeterStyle::Bar => render_signal_bar(scan.strongest(), &params.palette, leds),
        },
    }
}
