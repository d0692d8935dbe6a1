//! Button debouncing
//!
//! Polled, time based debouncer. It never blocks: every loop iteration feeds
//! the raw reading in and gets back whether a clean press just happened.

use embassy_time::{Duration, Instant};

/// Default debounce delay
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Debounced button state
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Reading from the previous sample
    last_reading: bool,
    /// Confirmed (debounced) state
    stable: bool,
    /// Time the reading last changed
    last_change: Instant,
    delay: Duration,
}

impl Debouncer {
    /// Create a released debouncer
    pub const fn new(delay: Duration) -> Self {
        Self {
            last_reading: false,
            stable: false,
            last_change: Instant::from_ticks(0),
            delay,
        }
    }

    /// Feed a raw reading (`true` = pressed)
    ///
    /// Returns `true` exactly once per press, when the pressed state has been
    /// held for longer than the delay. Releases are committed silently.
    pub fn update(&mut self, pressed: bool, now: Instant) -> bool {
        if pressed != self.last_reading {
            self.last_change = now;
        }
        self.last_reading = pressed;

        if now.saturating_duration_since(self.last_change) <= self.delay {
            return false;
        }
        if pressed == self.stable {
            return false;
        }

        self.stable = pressed;
        self.stable
    }

    /// Current debounced state
    pub const fn is_pressed(&self) -> bool {
        self.stable
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
