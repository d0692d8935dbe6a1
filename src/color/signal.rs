//! Signal strength palette
//!
//! Maps a received signal strength (dBm) onto a six step palette running
//! from red (weak) through yellow to green (strong).

use crate::color::{Rgb, rgb_from_u32};

/// Number of palette steps
pub const SIGNAL_LEVELS: usize = 6;

/// Palette and ascending dBm thresholds used by the signal meter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalPalette {
    /// Upper bound (inclusive) of every level, ascending
    pub thresholds: [i8; SIGNAL_LEVELS],
    /// Color of every level, weakest first
    pub colors: [Rgb; SIGNAL_LEVELS],
}

#[allow(clippy::unreadable_literal)]
pub const DEFAULT_SIGNAL_PALETTE: SignalPalette = SignalPalette {
    thresholds: [-90, -80, -70, -60, -50, -40],
    colors: [
        rgb_from_u32(0xFF0000), // Very weak
        rgb_from_u32(0xFF3C00), // Weak
        rgb_from_u32(0xFF7800), // Fair
        rgb_from_u32(0xFFC800), // Good
        rgb_from_u32(0x96FF00), // Very good
        rgb_from_u32(0x00FF00), // Excellent
    ],
};

impl SignalPalette {
    /// Level of the signal, `0` is the weakest
    ///
    /// The first threshold the strength is less or equal to wins.
    /// Anything stronger than the last threshold is the best level.
    pub fn index_for(&self, rssi: i8) -> usize {
        self.thresholds
            .iter()
            .position(|&threshold| rssi <= threshold)
            .unwrap_or(SIGNAL_LEVELS - 1)
    }

    /// Palette color of the signal
    pub fn color_for(&self, rssi: i8) -> Rgb {
        self.colors[self.index_for(rssi)]
    }

    /// Palette color of a level, clamped to the strongest one
    pub fn level_color(&self, level: usize) -> Rgb {
        self.colors[level.min(SIGNAL_LEVELS - 1)]
    }
}

impl Default for SignalPalette {
    fn default() -> Self {
        DEFAULT_SIGNAL_PALETTE
    }
}

/// Map signal strength to a color of the default palette
pub fn signal_to_color(rssi: i8) -> Rgb {
    DEFAULT_SIGNAL_PALETTE.color_for(rssi)
}

/// Map signal strength to a level (`0..=5`) of the default palette
pub fn signal_to_index(rssi: i8) -> usize {
    DEFAULT_SIGNAL_PALETTE.index_for(rssi)
}
