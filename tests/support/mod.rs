#![allow(dead_code)]

use std::convert::Infallible;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin};
use myrtio_signal_strip::{NetworkObservation, NetworkScanner, OutputDriver, Rgb};

/// Strip driver that keeps every submitted frame
#[derive(Debug, Default)]
pub struct RecordingStrip {
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingStrip {
    pub fn last(&self) -> &[Rgb] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl OutputDriver for RecordingStrip {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

/// Pulled up button, `low` while pressed
#[derive(Debug, Default)]
pub struct MockButton {
    pub low: bool,
}

impl ErrorType for MockButton {
    type Error = Infallible;
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.low)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Button whose reads always fail
#[derive(Debug, Default)]
pub struct BrokenButton;

impl ErrorType for BrokenButton {
    type Error = PinFault;
}

impl InputPin for BrokenButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

/// Output pin that records every level it was set to
#[derive(Debug, Default)]
pub struct RecordingPin {
    pub levels: Vec<bool>,
}

impl RecordingPin {
    pub fn is_high(&self) -> bool {
        self.levels.last().copied().unwrap_or(false)
    }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioFault;

/// Scanner replaying a fixed list of networks
#[derive(Debug, Default)]
pub struct ScriptedScanner {
    pub networks: Vec<(&'static str, i8, u8)>,
    /// Report the networks, then fail
    pub fail: bool,
    pub calls: usize,
}

impl ScriptedScanner {
    pub fn new(networks: &[(&'static str, i8, u8)]) -> Self {
        Self {
            networks: networks.to_vec(),
            fail: false,
            calls: 0,
        }
    }

    pub fn failing() -> Self {
        Self {
            networks: Vec::new(),
            fail: true,
            calls: 0,
        }
    }
}

impl NetworkScanner for ScriptedScanner {
    type Error = RadioFault;

    fn scan(&mut self, on_network: &mut dyn FnMut(NetworkObservation)) -> Result<(), Self::Error> {
        self.calls += 1;
        for (ssid, rssi, channel) in &self.networks {
            on_network(NetworkObservation::new(ssid, *rssi, *channel));
        }
        if self.fail { Err(RadioFault) } else { Ok(()) }
    }
}
