//! First-order allpass section for phaser sweeps.
//!
//! Passes all frequencies at unit gain while shifting phase by 180 degrees
//! at its center frequency. Cascading several sections and mixing with the
//! dry signal carves the moving notches that make a phaser.

use crate::math::flush_denormal;
use libm::tanf;

/// First-order allpass filter.
///
/// Difference equation: `y[n] = a * x[n] + x[n-1] - a * y[n-1]`
/// with `a = (tan(pi*fc/fs) - 1) / (tan(pi*fc/fs) + 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOrderAllpass {
    a: f32,
    x1: f32,
    y1: f32,
}

impl FirstOrderAllpass {
    /// Create an allpass with zeroed state and coefficient.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 180-degree phase-shift frequency.
    ///
    /// The frequency is clamped to a stable region below Nyquist.
    #[inline]
    pub fn set_frequency(&mut self, freq_hz: f32, sample_rate: f32) {
        let freq = freq_hz.clamp(10.0, sample_rate * 0.45);
        let t = tanf(core::f32::consts::PI * freq / sample_rate);
        self.a = (t - 1.0) / (t + 1.0);
    }

    /// Process one sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = self.a * input + self.x1 - self.a * self.y1;
        self.x1 = input;
        self.y1 = flush_denormal(output);
        output
    }

    /// Clear filter memory, keeping the coefficient.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.y1 = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_gain_at_dc() {
        let mut ap = FirstOrderAllpass::new();
        ap.set_frequency(1000.0, 48000.0);
        // Feed DC until settled; an allpass passes DC at unit gain.
        let mut out = 0.0;
        for _ in 0..4800 {
            out = ap.process(1.0);
        }
        assert!((out - 1.0).abs() < 1e-3);
    }

    #[test]
    fn output_is_bounded() {
        let mut ap = FirstOrderAllpass::new();
        ap.set_frequency(500.0, 48000.0);
        for i in 0..10000 {
            let x = libm::sinf(i as f32 * 0.1);
            let y = ap.process(x);
            assert!(y.abs() < 4.0);
        }
    }

    #[test]
    fn reset_clears_memory() {
        let mut ap = FirstOrderAllpass::new();
        ap.set_frequency(1000.0, 48000.0);
        ap.process(1.0);
        ap.reset();
        // With zeroed memory, output depends only on the current input.
        let y = ap.process(0.0);
        assert_eq!(y, 0.0);
    }
}
