//! Terminal preview for myrtio-signal-strip
//!
//! Simulates the strip as a row of colored blocks. Press Enter to push the
//! mode button, Ctrl-C to stop (the strip is switched off before exit).

use std::convert::Infallible;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration as StdDuration, Instant as StdInstant};

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use myrtio_signal_strip::{
    Board, Config, FrameScheduler, Instant, NetworkObservation, NetworkScanner, OutputDriver,
    Rgb, ScanOutcome, StopSignal,
};

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = 6;

/// How long a simulated press holds the button down
const PRESS_HOLD: StdDuration = StdDuration::from_millis(150);

/// Simulated radio scan time
const SCAN_TIME: StdDuration = StdDuration::from_millis(400);

/// Every n-th scan fails, to show the fallback
const FAILING_SCAN_EVERY: u32 = 4;

static STOP: StopSignal = StopSignal::new();

const NETWORKS: [(&str, i8, u8); 5] = [
    ("myrtio-home", -48, 6),
    ("office", -63, 1),
    ("neighbour", -71, 11),
    ("cafe-guest", -82, 3),
    ("far-away", -93, 13),
];

/// Renders frames as truecolor blocks on one terminal line
struct TerminalStrip;

impl OutputDriver for TerminalStrip {
    fn write(&mut self, colors: &[Rgb]) {
        let mut line = String::from("\r");
        for color in colors {
            line.push_str(&format!("\x1b[48;2;{};{};{}m   \x1b[0m ", color.r, color.g, color.b));
        }
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(line.as_bytes());
        let _ = stdout.flush();
    }
}

/// Button driven by Enter presses on stdin
struct StdinButton {
    origin: StdInstant,
    /// Milliseconds since `origin` of the last press, 0 if never pressed
    last_press_ms: Arc<AtomicU64>,
}

impl StdinButton {
    fn spawn() -> Self {
        let origin = StdInstant::now();
        let last_press_ms = Arc::new(AtomicU64::new(0));
        let shared = Arc::clone(&last_press_ms);
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                if line.is_err() {
                    break;
                }
                let elapsed = u64::try_from(origin.elapsed().as_millis()).unwrap_or(u64::MAX);
                shared.store(elapsed.max(1), Ordering::SeqCst);
            }
        });
        Self {
            origin,
            last_press_ms,
        }
    }
}

impl ErrorType for StdinButton {
    type Error = Infallible;
}

impl InputPin for StdinButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        let pressed_at = self.last_press_ms.load(Ordering::SeqCst);
        if pressed_at == 0 {
            return Ok(false);
        }
        let held = self.origin.elapsed().saturating_sub(StdDuration::from_millis(pressed_at));
        Ok(held < PRESS_HOLD)
    }
}

/// Status LED shown as a marker after the strip
struct ConsoleIndicator;

impl ErrorType for ConsoleIndicator {
    type Error = Infallible;
}

impl OutputPin for ConsoleIndicator {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        print!(" [ ]");
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        print!(" [*]");
        Ok(())
    }
}

#[derive(Debug)]
struct SimulatedRadioError;

/// Scanner returning a fixed neighbourhood with a little jitter
struct SimulatedScanner {
    scans: u32,
}

impl NetworkScanner for SimulatedScanner {
    type Error = SimulatedRadioError;

    fn scan(&mut self, on_network: &mut dyn FnMut(NetworkObservation)) -> Result<(), Self::Error> {
        self.scans += 1;
        thread::sleep(SCAN_TIME);
        if self.scans % FAILING_SCAN_EVERY == 0 {
            return Err(SimulatedRadioError);
        }

        for (index, (ssid, rssi, channel)) in NETWORKS.iter().enumerate() {
            let jitter = ((self.scans as usize + index * 3) % 7) as i8 - 3;
            on_network(NetworkObservation::new(ssid, rssi.saturating_add(jitter), *channel));
        }
        Ok(())
    }
}

fn main() {
    ctrlc::set_handler(|| STOP.request()).expect("Error setting Ctrl-C handler");

    println!("myrtio-signal-strip preview: Enter = button, Ctrl-C = stop");

    let board = Board {
        strip: TerminalStrip,
        button: StdinButton::spawn(),
        indicator: ConsoleIndicator,
        scanner: SimulatedScanner { scans: 0 },
    };
    let config = Config::DEFAULT.with_brightness(255);
    let mut scheduler: FrameScheduler<_, _, _, _, LED_COUNT> =
        FrameScheduler::new(&config, board, Instant::now());

    let mut mode = scheduler.modes().mode();
    print!("\n{}", mode.as_str());
    while !STOP.is_requested() {
        let result = scheduler.tick(Instant::now());
        if result.mode != mode {
            mode = result.mode;
            print!("\n{}", mode.as_str());
        }
        match result.scan {
            Some(ScanOutcome::Completed(count)) => print!(" {count} networks"),
            Some(ScanOutcome::Failed) => print!(" scan failed"),
            None => {}
        }
        thread::sleep(StdDuration::from_millis(result.sleep_duration.as_millis()));
    }

    scheduler.shutdown();
    println!("\nstopped");
}
