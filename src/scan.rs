//! Network scan scheduling
//!
//! Scans are best effort: a radio failure leaves the meter showing no
//! networks until the next scheduled scan succeeds.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::OutputPin;
use heapless::{String, Vec};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Maximum SSID length in bytes
pub const SSID_MAX_LEN: usize = 32;

/// Maximum number of networks kept from a scan
pub const MAX_NETWORKS: usize = 32;

/// One network seen by a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkObservation {
    pub ssid: String<SSID_MAX_LEN>,
    /// Signal strength in dBm
    pub rssi: i8,
    pub channel: u8,
}

impl NetworkObservation {
    /// Create an observation, cutting the name to `SSID_MAX_LEN` bytes
    pub fn new(ssid: &str, rssi: i8, channel: u8) -> Self {
        let mut name = String::new();
        for ch in ssid.chars() {
            if name.push(ch).is_err() {
                break;
            }
        }
        Self {
            ssid: name,
            rssi,
            channel,
        }
    }
}

/// Wi-Fi scanning capability
///
/// Implemented by the radio adapter. `scan` blocks until the radio has
/// finished and reports every visible network through `on_network`.
pub trait NetworkScanner {
    type Error: core::fmt::Debug;

    fn scan(&mut self, on_network: &mut dyn FnMut(NetworkObservation)) -> Result<(), Self::Error>;
}

/// Result of a scan attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Scan finished, with the number of networks kept
    Completed(usize),
    /// Radio failed, the cache was cleared
    Failed,
}

/// Cached scan results
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    last_scan: Option<Instant>,
    /// Networks sorted by signal strength, strongest first
    observations: Vec<NetworkObservation, MAX_NETWORKS>,
}

impl ScanState {
    pub const fn new() -> Self {
        Self {
            last_scan: None,
            observations: Vec::new(),
        }
    }

    pub fn observations(&self) -> &[NetworkObservation] {
        &self.observations
    }

    pub const fn last_scan(&self) -> Option<Instant> {
        self.last_scan
    }

    /// Strongest network of the last scan
    pub fn strongest(&self) -> Option<&NetworkObservation> {
        self.observations.first()
    }

    /// Insert keeping descending order
    ///
    /// Equal strengths keep arrival order. When full, the weakest network is
    /// dropped.
    fn insert(&mut self, observation: NetworkObservation) {
        let index = self
            .observations
            .iter()
            .position(|existing| existing.rssi < observation.rssi)
            .unwrap_or(self.observations.len());

        if self.observations.is_full() {
            if index >= self.observations.len() {
                return;
            }
            self.observations.pop();
        }
        let _ = self.observations.insert(index, observation);
    }
}

/// Decides when to scan and owns the scan cache
#[derive(Debug, Clone)]
pub struct ScanScheduler {
    state: ScanState,
    interval: Duration,
}

impl ScanScheduler {
    pub const fn new(interval: Duration) -> Self {
        Self {
            state: ScanState::new(),
            interval,
        }
    }

    pub const fn state(&self) -> &ScanState {
        &self.state
    }

    /// Whether a scan is due
    ///
    /// `immediate` forces a scan regardless of the last one.
    pub fn is_due(&self, immediate: bool, now: Instant) -> bool {
        if immediate {
            return true;
        }
        match self.state.last_scan {
            Some(last) => now.saturating_duration_since(last) > self.interval,
            None => true,
        }
    }

    /// Scan if due
    pub fn poll<S, I>(
        &mut self,
        immediate: bool,
        now: Instant,
        scanner: &mut S,
        indicator: &mut I,
    ) -> Option<ScanOutcome>
    where
        S: NetworkScanner,
        I: OutputPin,
    {
        if !self.is_due(immediate, now) {
            return None;
        }
        Some(self.scan(now, scanner, indicator))
    }

    /// Run a scan and replace the cache
    ///
    /// The indicator is high for the duration of the scan. Indicator errors
    /// are ignored, scanner errors empty the cache.
    pub fn scan<S, I>(&mut self, now: Instant, scanner: &mut S, indicator: &mut I) -> ScanOutcome
    where
        S: NetworkScanner,
        I: OutputPin,
    {
        #[cfg(feature = "esp32-log")]
        println!("[ScanScheduler] scanning for networks");

        let _ = indicator.set_high();
        self.state.observations.clear();
        let result = scanner.scan(&mut |observation: NetworkObservation| {
            self.state.insert(observation);
        });
        let _ = indicator.set_low();

        self.state.last_scan = Some(now);
        match result {
            Ok(()) => {
                #[cfg(feature = "esp32-log")]
                for (rank, network) in self.state.observations.iter().enumerate() {
                    println!(
                        "[ScanScheduler] {}. {}: {} dBm (channel {})",
                        rank + 1,
                        network.ssid,
                        network.rssi,
                        network.channel
                    );
                }
                ScanOutcome::Completed(self.state.observations.len())
            }
            Err(_err) => {
                #[cfg(feature = "esp32-log")]
                println!("[ScanScheduler] scan failed: {:?}", _err);
                self.state.observations.clear();
                ScanOutcome::Failed
            }
        }
    }
}
