//! Fixed startup configuration
//!
//! Everything here is decided once when the controller is built. There is
//! no runtime editing surface.

use embassy_time::Duration;

use crate::color::{DEFAULT_SIGNAL_PALETTE, Rgb, SignalPalette, rgb_from_u32};
use crate::debounce::DEFAULT_DEBOUNCE;
use crate::fade::DEFAULT_FADE_WIDTH;

/// Target frame interval (20 FPS)
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(50);
/// Interval between duo pattern phase flips
pub const DEFAULT_PHASE_INTERVAL: Duration = Duration::from_secs(2);
/// Interval between network scans while the signal meter is shown
pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(5);
/// Comet movement per frame, in pixels
pub const DEFAULT_POSITION_STEP: f32 = 0.1;
/// Rainbow offset movement per frame
pub const DEFAULT_RAINBOW_STEP: u8 = 5;
/// Global brightness (0.3 of full scale)
pub const DEFAULT_BRIGHTNESS: u8 = 77;
/// Number of status indicator blinks on startup
pub const DEFAULT_STARTUP_BLINKS: u8 = 3;
/// Half period of a startup blink
pub const DEFAULT_BLINK_HALF_PERIOD: Duration = Duration::from_millis(100);

#[allow(clippy::unreadable_literal)]
pub const BLUE: Rgb = rgb_from_u32(0x0032FF);
#[allow(clippy::unreadable_literal)]
pub const ORANGE: Rgb = rgb_from_u32(0xFF5000);
#[allow(clippy::unreadable_literal)]
pub const WHITE: Rgb = rgb_from_u32(0xFFFFFF);

/// Layout of the signal meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeterStyle {
    /// One pixel per network, strongest first
    #[default]
    List,
    /// Bar graph of the strongest network's level
    Bar,
}

/// Colors and timing of the animations
#[derive(Debug, Clone, Copy)]
pub struct AnimationConfig {
    /// Color shared by both duo modes
    pub primary: Rgb,
    /// Second color of the first duo mode
    pub secondary: Rgb,
    /// Second color of the alternative duo mode
    pub secondary_alt: Rgb,
    /// Interval between duo phase flips
    pub phase_interval: Duration,
    /// Comet movement per frame
    pub position_step: f32,
    /// Comet bell curve width
    pub fade_width: f32,
    /// Rainbow offset movement per frame
    pub rainbow_step: u8,
}

/// Signal meter configuration
#[derive(Debug, Clone, Copy)]
pub struct MeterConfig {
    pub style: MeterStyle,
    pub palette: SignalPalette,
    /// Interval between scans while the meter is shown
    pub scan_interval: Duration,
}

/// Startup blink of the status indicator
#[derive(Debug, Clone, Copy)]
pub struct BlinkConfig {
    pub count: u8,
    pub half_period: Duration,
}

/// Controller configuration
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Global brightness applied when the frame is submitted
    pub brightness: u8,
    /// Frame interval
    pub frame_duration: Duration,
    /// Button debounce delay
    pub debounce: Duration,
    pub animation: AnimationConfig,
    pub meter: MeterConfig,
    pub startup_blink: BlinkConfig,
}

impl Config {
    pub const DEFAULT: Self = Self {
        brightness: DEFAULT_BRIGHTNESS,
        frame_duration: DEFAULT_FRAME_DURATION,
        debounce: DEFAULT_DEBOUNCE,
        animation: AnimationConfig {
            primary: BLUE,
            secondary: ORANGE,
            secondary_alt: WHITE,
            phase_interval: DEFAULT_PHASE_INTERVAL,
            position_step: DEFAULT_POSITION_STEP,
            fade_width: DEFAULT_FADE_WIDTH,
            rainbow_step: DEFAULT_RAINBOW_STEP,
        },
        meter: MeterConfig {
            style: MeterStyle::List,
            palette: DEFAULT_SIGNAL_PALETTE,
            scan_interval: DEFAULT_SCAN_INTERVAL,
        },
        startup_blink: BlinkConfig {
            count: DEFAULT_STARTUP_BLINKS,
            half_period: DEFAULT_BLINK_HALF_PERIOD,
        },
    };

    /// Set the global brightness
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the signal meter layout
    #[must_use]
    pub const fn with_meter_style(mut self, style: MeterStyle) -> Self {
        self.meter.style = style;
        self
    }

    /// Disable the startup blink
    #[must_use]
    pub const fn without_startup_blink(mut self) -> Self {
        self.startup_blink.count = 0;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
