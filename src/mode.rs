//! Display modes and animation state
//!
//! The button cycles through a fixed sequence of modes. Animation sub-state
//! (comet position, duo phase, rainbow offset) survives mode changes, so
//! returning to a mode resumes where it was left.

use embassy_time::Instant;

use crate::config::AnimationConfig;

const MODE_NAME_CYCLIC_DUO: &str = "cyclic_duo";
const MODE_NAME_CYCLIC_DUO_ALT: &str = "cyclic_duo_alt";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_SIGNAL_METER: &str = "signal_meter";

const MODE_ID_CYCLIC_DUO: u8 = 0;
const MODE_ID_CYCLIC_DUO_ALT: u8 = 1;
const MODE_ID_RAINBOW: u8 = 2;
const MODE_ID_SIGNAL_METER: u8 = 3;

/// Display mode, in button cycling order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DisplayMode {
    /// Primary and secondary colors alternating under a moving comet
    #[default]
    CyclicDuo = MODE_ID_CYCLIC_DUO,
    /// Same as `CyclicDuo` with the alternative secondary color
    CyclicDuoAlt = MODE_ID_CYCLIC_DUO_ALT,
    /// Rotating rainbow
    Rainbow = MODE_ID_RAINBOW,
    /// Nearby Wi-Fi networks by signal strength
    SignalMeter = MODE_ID_SIGNAL_METER,
}

impl DisplayMode {
    pub const COUNT: u8 = 4;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_CYCLIC_DUO => Self::CyclicDuo,
            MODE_ID_CYCLIC_DUO_ALT => Self::CyclicDuoAlt,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_SIGNAL_METER => Self::SignalMeter,
            _ => return None,
        })
    }

    /// Next mode in the cycle
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::CyclicDuo => Self::CyclicDuoAlt,
            Self::CyclicDuoAlt => Self::Rainbow,
            Self::Rainbow => Self::SignalMeter,
            Self::SignalMeter => Self::CyclicDuo,
        }
    }

    /// Whether the mode runs the duo pattern with the comet
    pub const fn is_duo(self) -> bool {
        matches!(self, Self::CyclicDuo | Self::CyclicDuoAlt)
    }

    /// Whether the mode needs network scans
    pub const fn needs_network(self) -> bool {
        matches!(self, Self::SignalMeter)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CyclicDuo => MODE_NAME_CYCLIC_DUO,
            Self::CyclicDuoAlt => MODE_NAME_CYCLIC_DUO_ALT,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::SignalMeter => MODE_NAME_SIGNAL_METER,
        }
    }
}

/// Phase of the duo pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PatternPhase {
    /// Primary color on even pixels
    #[default]
    A,
    /// Primary color on odd pixels
    B,
}

impl PatternPhase {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Animation state consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    /// Comet position in `0.0..len`
    pub position: f32,
    pub phase: PatternPhase,
    pub rainbow_offset: u8,
    pub mode: DisplayMode,
}

/// Mode state machine
///
/// Advanced by confirmed button presses and by frames.
#[derive(Debug, Clone)]
pub struct ModeController {
    state: AnimationState,
    config: AnimationConfig,
    /// Number of pixels the comet travels around
    len: usize,
    last_phase_flip: Instant,
    scan_requested: bool,
}

impl ModeController {
    /// Create a controller in `CyclicDuo`, phase `A`, position 0
    ///
    /// The phase timer starts at `now`.
    pub const fn new(config: AnimationConfig, len: usize, now: Instant) -> Self {
        Self {
            state: AnimationState {
                position: 0.0,
                phase: PatternPhase::A,
                rainbow_offset: 0,
                mode: DisplayMode::CyclicDuo,
            },
            config,
            len,
            last_phase_flip: now,
            scan_requested: false,
        }
    }

    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    pub const fn mode(&self) -> DisplayMode {
        self.state.mode
    }

    /// Handle a confirmed button press
    ///
    /// Advances to the next mode. Entering the signal meter always requests
    /// an immediate scan.
    pub fn on_press(&mut self) -> DisplayMode {
        self.state.mode = self.state.mode.next();
        self.scan_requested = self.state.mode.needs_network();
        self.state.mode
    }

    /// Whether an immediate scan is pending
    pub const fn scan_requested(&self) -> bool {
        self.scan_requested
    }

    /// Consume the pending scan request
    pub fn take_scan_request(&mut self) -> bool {
        core::mem::take(&mut self.scan_requested)
    }

    /// Update time based state before the frame is rendered
    pub fn begin_frame(&mut self, now: Instant) {
        match self.state.mode {
            DisplayMode::CyclicDuo | DisplayMode::CyclicDuoAlt => {
                let elapsed = now.saturating_duration_since(self.last_phase_flip);
                if elapsed > self.config.phase_interval {
                    self.state.phase = self.state.phase.flipped();
                    self.last_phase_flip = now;
                }
            }
            DisplayMode::Rainbow => {
                self.state.rainbow_offset = self
                    .state
                    .rainbow_offset
                    .wrapping_add(self.config.rainbow_step);
            }
            DisplayMode::SignalMeter => {}
        }
    }

    /// Move the comet after the frame is rendered
    #[allow(clippy::cast_precision_loss)]
    pub fn end_frame(&mut self) {
        if !self.state.mode.is_duo() || self.len == 0 {
            return;
        }
        let len = self.len as f32;
        let position = libm::fmodf(self.state.position + self.config.position_step, len);
        self.state.position = if position < 0.0 { position + len } else { position };
    }
}
