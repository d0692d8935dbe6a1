//! Global brightness
//!
//! Scales every channel uniformly right before the frame is submitted.

use super::Filter;
use crate::{color::Rgb, math8::scale8};

/// Brightness scaling filter
#[derive(Debug, Clone, Copy)]
pub struct BrightnessFilter {
    /// Scale factor (0-255 = 0.0-1.0)
    brightness: u8,
}

impl BrightnessFilter {
    pub const fn new(brightness: u8) -> Self {
        Self { brightness }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }
}

impl Filter for BrightnessFilter {
    fn apply(&mut self, frame: &mut [Rgb]) {
        if self.brightness == 255 {
            return;
        }

        if self.brightness == 0 {
            for pixel in frame.iter_mut() {
                *pixel = Rgb { r: 0, g: 0, b: 0 };
            }
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, self.brightness);
            pixel.g = scale8(pixel.g, self.brightness);
            pixel.b = scale8(pixel.b, self.brightness);
        }
    }
}
