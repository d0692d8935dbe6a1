//! Stop request shared with interrupt and signal handlers

use core::cell::Cell;

use critical_section::Mutex;

/// Interrupt safe stop flag
///
/// A handler calls [`StopSignal::request`], the frame loop polls
/// [`StopSignal::is_requested`] and shuts the strip down.
pub struct StopSignal {
    requested: Mutex<Cell<bool>>,
}

impl StopSignal {
    pub const fn new() -> Self {
        Self {
            requested: Mutex::new(Cell::new(false)),
        }
    }

    pub fn request(&self) {
        critical_section::with(|cs| self.requested.borrow(cs).set(true));
    }

    pub fn is_requested(&self) -> bool {
        critical_section::with(|cs| self.requested.borrow(cs).get())
    }

    /// Clear a request that has been handled
    pub fn reset(&self) {
        critical_section::with(|cs| self.requested.borrow(cs).set(false));
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}
