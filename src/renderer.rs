use crate::color::{BLACK, Rgb};
use crate::config::Config;
use crate::effect::{self, EffectParams};
use crate::filter::{BrightnessFilter, Filter};
use crate::mode::AnimationState;
use crate::scan::ScanState;

/// Frame renderer
///
/// Owns the frame buffer. Every call rebuilds all `N` pixels from the
/// animation state and applies the global brightness.
pub struct Renderer<const N: usize> {
    params: EffectParams,
    brightness: BrightnessFilter,
    frame_buffer: [Rgb; N],
}

impl<const N: usize> Renderer<N> {
    pub const fn new(config: &Config) -> Self {
        Self {
            params: EffectParams::new(&config.animation, config.meter.style, config.meter.palette),
            brightness: BrightnessFilter::new(config.brightness),
            frame_buffer: [BLACK; N],
        }
    }

    /// Render one frame
    pub fn render(&mut self, state: &AnimationState, scan: &ScanState) -> &[Rgb] {
        effect::render(state, scan, &self.params, &mut self.frame_buffer);
        self.brightness.apply(&mut self.frame_buffer);
        &self.frame_buffer
    }

    /// Switch every pixel off
    pub fn clear(&mut self) -> &[Rgb] {
        self.frame_buffer.fill(BLACK);
        &self.frame_buffer
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    pub const fn params(&self) -> &EffectParams {
        &self.params
    }
}
