use crate::color::Rgb;

mod brightness;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&mut self, frame: &mut [Rgb]);
}

pub use brightness::BrightnessFilter;
