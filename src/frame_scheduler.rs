//! Frame scheduling and the control loop step.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::{InputPin, OutputPin};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::Config;
use crate::debounce::Debouncer;
use crate::indicator::IndicatorBlink;
use crate::mode::{DisplayMode, ModeController};
use crate::scan::{NetworkScanner, ScanOutcome, ScanScheduler};
use crate::{OutputDriver, Renderer, Rgb};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Mode after this frame.
    pub mode: DisplayMode,
    /// Scan performed during this frame, if any.
    pub scan: Option<ScanOutcome>,
}

/// Hardware capabilities the controller drives
pub struct Board<O, B, I, S> {
    /// LED strip
    pub strip: O,
    /// Mode button, pulled up (low while pressed)
    pub button: B,
    /// Scan status indicator
    pub indicator: I,
    /// Wi-Fi scanner
    pub scanner: S,
}

/// Portable frame scheduler that owns the whole controller state.
///
/// Every `tick`:
/// - samples and debounces the button
/// - advances the mode state machine
/// - scans for networks when the signal meter needs it
/// - renders and submits the frame
/// - returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::<_, _, _, _, 6>::new(&Config::DEFAULT, board, Instant::now());
///
/// while !STOP.is_requested() {
///     let result = scheduler.tick(Instant::now());
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// scheduler.shutdown();
/// ```
pub struct FrameScheduler<O, B, I, S, const N: usize>
where
    O: OutputDriver,
    B: InputPin,
    I: OutputPin,
    S: NetworkScanner,
{
    board: Board<O, B, I, S>,
    renderer: Renderer<N>,
    debouncer: Debouncer,
    modes: ModeController,
    scans: ScanScheduler,
    blink: IndicatorBlink,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O, B, I, S, const N: usize> FrameScheduler<O, B, I, S, N>
where
    O: OutputDriver,
    B: InputPin,
    I: OutputPin,
    S: NetworkScanner,
{
    /// Create a new frame scheduler.
    ///
    /// Animation timers start at `now`.
    pub fn new(config: &Config, board: Board<O, B, I, S>, now: Instant) -> Self {
        Self {
            board,
            renderer: Renderer::new(config),
            debouncer: Debouncer::new(config.debounce),
            modes: ModeController::new(config.animation, N, now),
            scans: ScanScheduler::new(config.meter.scan_interval),
            blink: IndicatorBlink::new(config.startup_blink, now),
            next_frame: Instant::from_millis(0),
            frame_duration: config.frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: a blocking scan must not cause a catch-up burst
        let max_drift = Duration::from_ticks(self.frame_duration.as_ticks() * 2);
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        self.blink.tick(now, &mut self.board.indicator);
        self.process_button(now);

        let mut scan = None;
        if self.modes.mode().needs_network() {
            let immediate = self.modes.take_scan_request();
            scan = self.scans.poll(
                immediate,
                now,
                &mut self.board.scanner,
                &mut self.board.indicator,
            );
        }

        self.modes.begin_frame(now);
        let frame = self.renderer.render(self.modes.state(), self.scans.state());
        self.board.strip.write(frame);
        self.modes.end_frame();

        self.next_frame += self.frame_duration;
        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_ticks(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            mode: self.modes.mode(),
            scan,
        }
    }

    /// Switch the strip and the indicator off.
    ///
    /// Call once when the loop is asked to stop.
    pub fn shutdown(&mut self) {
        let frame = self.renderer.clear();
        self.board.strip.write(frame);
        let _ = self.board.indicator.set_low();

        #[cfg(feature = "esp32-log")]
        println!("[FrameScheduler] stopped");
    }

    /// Last submitted frame.
    pub fn frame(&self) -> &[Rgb] {
        self.renderer.frame()
    }

    pub const fn modes(&self) -> &ModeController {
        &self.modes
    }

    pub const fn scans(&self) -> &ScanScheduler {
        &self.scans
    }

    pub const fn board(&self) -> &Board<O, B, I, S> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<O, B, I, S> {
        &mut self.board
    }

    /// Sample the button and switch modes on a clean press
    fn process_button(&mut self, now: Instant) {
        // A failed read counts as released
        let pressed = self.board.button.is_low().unwrap_or(false);
        if !self.debouncer.update(pressed, now) {
            return;
        }

        let _mode = self.modes.on_press();
        #[cfg(feature = "esp32-log")]
        println!("[FrameScheduler] mode changed: {}", _mode.as_str());
    }
}
