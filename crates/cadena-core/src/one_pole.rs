//! One-pole lowpass filter.
//!
//! The simplest IIR lowpass — 6 dB/octave, one multiply per sample:
//!
//! ```text
//! y[n] = x[n] + coeff * (y[n-1] - x[n])
//! ```
//!
//! with `coeff = exp(-2π * freq / sample_rate)`. Four of these cascaded form
//! the ladder filter stage; one of them serves as a tone control.

use crate::math::flush_denormal;
use libm::expf;

/// One-pole (6 dB/oct) lowpass section.
#[derive(Debug, Clone)]
pub struct OnePole {
    state: f32,
    coeff: f32,
    sample_rate: f32,
    freq: f32,
}

impl OnePole {
    /// Create a lowpass with the given cutoff.
    pub fn new(sample_rate: f32, freq_hz: f32) -> Self {
        let mut f = Self {
            state: 0.0,
            coeff: 0.0,
            sample_rate,
            freq: freq_hz,
        };
        f.recalculate_coeff();
        f
    }

    /// Set the cutoff frequency in Hz.
    pub fn set_frequency(&mut self, freq_hz: f32) {
        self.freq = freq_hz;
        self.recalculate_coeff();
    }

    /// Process one sample, returning the lowpass output.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.state = flush_denormal(input + self.coeff * (self.state - input));
        self.state
    }

    /// The last output sample (filter memory).
    #[inline]
    pub fn state(&self) -> f32 {
        self.state
    }

    /// Clear filter memory.
    pub fn reset(&mut self) {
        self.state = 0.0;
    }

    /// Update the sample rate, preserving the cutoff frequency.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recalculate_coeff();
    }

    fn recalculate_coeff(&mut self) {
        self.coeff = expf(-core::f32::consts::TAU * self.freq / self.sample_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_dc() {
        let mut lp = OnePole::new(48000.0, 1000.0);
        let mut out = 0.0;
        for _ in 0..48000 {
            out = lp.process(1.0);
        }
        assert!((out - 1.0).abs() < 1e-3);
    }

    #[test]
    fn attenuates_fast_changes() {
        let mut lp = OnePole::new(48000.0, 100.0);
        // Alternate +1/-1 (Nyquist) — a 100 Hz lowpass nearly kills it.
        let mut peak = 0.0f32;
        for i in 0..4800 {
            let x = if i % 2 == 0 { 1.0 } else { -1.0 };
            peak = peak.max(lp.process(x).abs());
        }
        assert!(peak < 0.05);
    }

    #[test]
    fn reset_clears_state() {
        let mut lp = OnePole::new(48000.0, 1000.0);
        lp.process(1.0);
        lp.reset();
        assert_eq!(lp.state(), 0.0);
    }
}
