//! Chorus stage: LFO-modulated delay line.
//!
//! The input is delayed by a slowly wobbling amount and mixed back with the
//! dry signal; the pitch wobble of the delayed copy against the dry copy
//! reads as multiple detuned voices. Left and right use LFOs 90 degrees
//! apart for stereo width, and a feedback tap thickens the texture.

use cadena_core::{Effect, InterpolatedDelay, Lfo, SmoothedParam, ms_to_samples, wet_dry_mix};

/// Largest supported center delay plus modulation headroom.
const MAX_DELAY_MS: f32 = 110.0;

/// Peak modulation swing at full depth.
const MOD_RANGE_MS: f32 = 4.0;

/// Chorus effect.
///
/// | Parameter | Range | Default |
/// |-----------|-------|---------|
/// | rate | 0.01–2.0 Hz | 0.2 |
/// | depth | 0.05–1.0 | 0.2 |
/// | center delay | 1–100 ms | 7 |
/// | feedback | -1.0–1.0 | 0.0 |
/// | mix | 0.01–1.0 | 0.05 |
#[derive(Debug, Clone)]
pub struct Chorus {
    delay_l: InterpolatedDelay,
    delay_r: InterpolatedDelay,
    lfo_l: Lfo,
    lfo_r: Lfo,
    rate: SmoothedParam,
    depth: SmoothedParam,
    center_delay_ms: SmoothedParam,
    feedback: SmoothedParam,
    mix: SmoothedParam,
    sample_rate: f32,
}

impl Chorus {
    /// Create a chorus with default parameters.
    pub fn new(sample_rate: f32) -> Self {
        let mut lfo_r = Lfo::new(sample_rate, 0.2);
        lfo_r.set_phase(0.25); // 90 degrees from the left voice

        Self {
            delay_l: InterpolatedDelay::from_ms(sample_rate, MAX_DELAY_MS),
            delay_r: InterpolatedDelay::from_ms(sample_rate, MAX_DELAY_MS),
            lfo_l: Lfo::new(sample_rate, 0.2),
            lfo_r,
            rate: SmoothedParam::standard(0.2, sample_rate),
            depth: SmoothedParam::standard(0.2, sample_rate),
            center_delay_ms: SmoothedParam::standard(7.0, sample_rate),
            feedback: SmoothedParam::standard(0.0, sample_rate),
            mix: SmoothedParam::standard(0.05, sample_rate),
            sample_rate,
        }
    }

    /// Set LFO rate in Hz.
    pub fn set_rate(&mut self, rate_hz: f32) {
        self.rate.set_target(rate_hz.clamp(0.01, 2.0));
    }

    /// Set modulation depth (0.05-1).
    pub fn set_depth(&mut self, depth: f32) {
        self.depth.set_target(depth.clamp(0.05, 1.0));
    }

    /// Set center delay in milliseconds (1-100).
    pub fn set_center_delay_ms(&mut self, delay_ms: f32) {
        self.center_delay_ms.set_target(delay_ms.clamp(1.0, 100.0));
    }

    /// Set feedback amount (-1 to 1).
    pub fn set_feedback(&mut self, feedback: f32) {
        self.feedback.set_target(feedback.clamp(-1.0, 1.0));
    }

    /// Set wet/dry mix (0.01-1).
    pub fn set_mix(&mut self, mix: f32) {
        self.mix.set_target(mix.clamp(0.01, 1.0));
    }
}

impl Effect for Chorus {
    #[inline]
    fn process_sample(&mut self, left: f32, right: f32) -> (f32, f32) {
        let rate = self.rate.advance();
        let depth = self.depth.advance();
        let center_ms = self.center_delay_ms.advance();
        let feedback = self.feedback.advance() * 0.95;
        let mix = self.mix.advance();

        self.lfo_l.set_frequency(rate);
        self.lfo_r.set_frequency(rate);

        // Modulation swing never exceeds the center delay itself, so the
        // read position cannot land ahead of the write position.
        let swing_ms = (depth * MOD_RANGE_MS).min(center_ms - 0.5);
        let delay_l_ms = center_ms + self.lfo_l.advance() * swing_ms;
        let delay_r_ms = center_ms + self.lfo_r.advance() * swing_ms;

        let wet_l = self.delay_l.read(ms_to_samples(delay_l_ms, self.sample_rate));
        let wet_r = self.delay_r.read(ms_to_samples(delay_r_ms, self.sample_rate));

        self.delay_l.write(left + wet_l * feedback);
        self.delay_r.write(right + wet_r * feedback);

        (
            wet_dry_mix(left, wet_l, mix),
            wet_dry_mix(right, wet_r, mix),
        )
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.delay_l = InterpolatedDelay::from_ms(sample_rate, MAX_DELAY_MS);
        self.delay_r = InterpolatedDelay::from_ms(sample_rate, MAX_DELAY_MS);
        self.lfo_l.set_sample_rate(sample_rate);
        self.lfo_r.set_sample_rate(sample_rate);
        self.rate.set_sample_rate(sample_rate);
        self.depth.set_sample_rate(sample_rate);
        self.center_delay_ms.set_sample_rate(sample_rate);
        self.feedback.set_sample_rate(sample_rate);
        self.mix.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.delay_l.clear();
        self.delay_r.clear();
        self.lfo_l.reset();
        self.lfo_r.reset();
        self.lfo_r.set_phase(0.25);
        self.rate.snap_to_target();
        self.depth.snap_to_target();
        self.center_delay_ms.snap_to_target();
        self.feedback.snap_to_target();
        self.mix.snap_to_target();
    }
}
