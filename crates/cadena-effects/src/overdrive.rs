//! Overdrive stage: saturating waveshaper.
//!
//! Drives the signal into a tanh-shaped soft clipper. The post-gain divides
//! by the shaper's response at full scale, so turning saturation up adds
//! harmonics without a matching jump in loudness.

use cadena_core::{Effect, SmoothedParam, fast_tanh};

/// Overdrive effect.
///
/// | Parameter | Range | Default |
/// |-----------|-------|---------|
/// | saturation | 1–100 | 1 |
#[derive(Debug, Clone)]
pub struct Overdrive {
    saturation: SmoothedParam,
}

impl Overdrive {
    /// Create an overdrive with unity (clean) saturation.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            saturation: SmoothedParam::standard(1.0, sample_rate),
        }
    }

    /// Set the saturation amount (1-100). 1 is nearly clean.
    pub fn set_saturation(&mut self, saturation: f32) {
        self.saturation.set_target(saturation.clamp(1.0, 100.0));
    }

    #[inline]
    fn shape(x: f32, drive: f32, makeup: f32) -> f32 {
        fast_tanh(x * drive) * makeup
    }
}

impl Effect for Overdrive {
    #[inline]
    fn process_sample(&mut self, left: f32, right: f32) -> (f32, f32) {
        let drive = self.saturation.advance();
        // Normalize so a full-scale input still peaks near full scale.
        let makeup = 1.0 / fast_tanh(drive);
        (
            Self::shape(left, drive, makeup),
            Self::shape(right, drive, makeup),
        )
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.saturation.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.saturation.snap_to_target();
    }
}
