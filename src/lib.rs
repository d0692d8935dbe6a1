#![no_std]

pub mod color;
pub mod config;
pub mod debounce;
pub mod effect;
pub mod fade;
pub mod filter;
pub mod frame_scheduler;
pub mod indicator;
pub mod math8;
pub mod mode;
pub mod renderer;
pub mod scan;
pub mod stop;

pub use config::{Config, MeterStyle};
pub use debounce::Debouncer;
pub use frame_scheduler::{Board, FrameResult, FrameScheduler};
pub use mode::{AnimationState, DisplayMode, ModeController, PatternPhase};
pub use renderer::Renderer;
pub use scan::{NetworkObservation, NetworkScanner, ScanOutcome, ScanScheduler, ScanState};
pub use stop::StopSignal;

pub use color::{Rgb, blend, signal_to_color, signal_to_index, wheel};
pub use fade::fade_weight;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait. `write` submits a whole
/// frame at once.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
