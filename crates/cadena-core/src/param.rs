//! Parameter smoothing for zipper-free changes.
//!
//! Audio parameters written from a control thread land at arbitrary moments
//! relative to the audio callback. Applying them instantly produces audible
//! "zipper" steps; [`SmoothedParam`] interpolates towards the most recent
//! target with a one-pole lowpass so the audible value always moves
//! continuously.

use libm::expf;

/// A parameter value with built-in exponential smoothing.
///
/// The current value approaches the target like an RC circuit: after one
/// time constant it has covered 63% of the distance, after five it is
/// settled for audio purposes.
#[derive(Debug, Clone)]
pub struct SmoothedParam {
    current: f32,
    target: f32,
    coeff: f32,
    sample_rate: f32,
    smoothing_ms: f32,
}

impl SmoothedParam {
    /// Default smoothing time used by [`standard`](Self::standard).
    pub const STANDARD_MS: f32 = 20.0;

    /// Create a smoothed parameter with an explicit smoothing time.
    pub fn new(initial: f32, sample_rate: f32, smoothing_ms: f32) -> Self {
        let mut p = Self {
            current: initial,
            target: initial,
            coeff: 0.0,
            sample_rate,
            smoothing_ms,
        };
        p.recalculate_coeff();
        p
    }

    /// Create a parameter with the standard 20 ms smoothing time.
    pub fn standard(initial: f32, sample_rate: f32) -> Self {
        Self::new(initial, sample_rate, Self::STANDARD_MS)
    }

    /// Create a parameter with fast 5 ms smoothing (gain-like controls).
    pub fn fast(initial: f32, sample_rate: f32) -> Self {
        Self::new(initial, sample_rate, 5.0)
    }

    /// Set the value the parameter smooths towards.
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Current target value.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current smoothed value, without advancing.
    #[inline]
    pub fn get(&self) -> f32 {
        self.current
    }

    /// Advance one sample and return the smoothed value.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        // y[n] = y[n-1] + coeff * (target - y[n-1])
        self.current += self.coeff * (self.target - self.current);
        self.current
    }

    /// Jump straight to the target, skipping the remaining ramp.
    #[inline]
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
    }

    /// Whether the ramp has effectively finished.
    #[inline]
    pub fn is_settled(&self) -> bool {
        (self.current - self.target).abs() < 1e-6
    }

    /// Update the sample rate and keep the same smoothing time.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recalculate_coeff();
    }

    // coeff = 1 - exp(-1 / (tau * fs)), tau = smoothing_ms / 1000.
    // smoothing_ms == 0 degenerates to instant changes (coeff = 1).
    fn recalculate_coeff(&mut self) {
        if self.smoothing_ms <= 0.0 {
            self.coeff = 1.0;
        } else {
            let tau_samples = self.smoothing_ms * 0.001 * self.sample_rate;
            self.coeff = 1.0 - expf(-1.0 / tau_samples);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_to_target() {
        let mut p = SmoothedParam::standard(0.0, 48000.0);
        p.set_target(1.0);
        // 5 time constants: 5 * 20ms * 48kHz = 4800 samples
        for _ in 0..4800 {
            p.advance();
        }
        assert!((p.get() - 1.0).abs() < 0.01);
    }

    #[test]
    fn snap_skips_ramp() {
        let mut p = SmoothedParam::standard(0.0, 48000.0);
        p.set_target(2.5);
        p.snap_to_target();
        assert_eq!(p.get(), 2.5);
        assert!(p.is_settled());
    }

    #[test]
    fn zero_smoothing_is_instant() {
        let mut p = SmoothedParam::new(0.0, 48000.0, 0.0);
        p.set_target(1.0);
        assert_eq!(p.advance(), 1.0);
    }

    #[test]
    fn ramp_is_monotonic() {
        let mut p = SmoothedParam::standard(0.0, 48000.0);
        p.set_target(1.0);
        let mut prev = 0.0;
        for _ in 0..1000 {
            let v = p.advance();
            assert!(v >= prev);
            prev = v;
        }
    }
}
