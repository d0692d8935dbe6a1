//! Status indicator blink sequence
//!
//! Blinks the status LED a few times at startup without stalling the
//! frame loop: every tick sets the pin for the current point in time.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::OutputPin;

use crate::config::BlinkConfig;

/// Non-blocking blink sequencer
#[derive(Debug, Clone)]
pub struct IndicatorBlink {
    count: u8,
    half_period: Duration,
    started: Instant,
    finished: bool,
}

impl IndicatorBlink {
    pub const fn new(config: BlinkConfig, now: Instant) -> Self {
        Self {
            count: config.count,
            half_period: config.half_period,
            started: now,
            finished: config.count == 0,
        }
    }

    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the indicator is lit at `now`
    pub fn is_lit(&self, now: Instant) -> bool {
        if self.finished {
            return false;
        }
        let step = self.step(now);
        step < self.total_steps() && step % 2 == 0
    }

    /// Drive the indicator pin for `now`
    ///
    /// Releases the pin (low) once the sequence is over.
    pub fn tick<I: OutputPin>(&mut self, now: Instant, indicator: &mut I) {
        if self.finished {
            return;
        }
        let step = self.step(now);
        if step >= self.total_steps() {
            self.finished = true;
            let _ = indicator.set_low();
            return;
        }
        let _ = if step % 2 == 0 {
            indicator.set_high()
        } else {
            indicator.set_low()
        };
    }

    /// Index of the half period `now` falls into
    fn step(&self, now: Instant) -> u64 {
        let half = self.half_period.as_ticks().max(1);
        now.saturating_duration_since(self.started).as_ticks() / half
    }

    fn total_steps(&self) -> u64 {
        u64::from(self.count) * 2
    }
}
