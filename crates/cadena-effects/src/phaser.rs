//! Phaser stage: LFO-swept allpass cascade.
//!
//! Four first-order allpass sections per channel, their center frequency
//! swept around a configurable point by a shared LFO. Mixing the shifted
//! signal back with the dry input creates moving spectral notches; feedback
//! around the cascade deepens them.

use cadena_core::{Effect, FirstOrderAllpass, Lfo, SmoothedParam, wet_dry_mix};
use libm::exp2f;

/// Allpass sections per channel.
const STAGES: usize = 4;

/// Sweep range in octaves around the center frequency at full depth.
const SWEEP_OCTAVES: f32 = 1.5;

/// Samples between allpass coefficient updates.
///
/// The sweep moves at LFO rate (at most 2 Hz), so recomputing the tan-based
/// coefficients every 16 samples (~0.3 ms at 48 kHz) is inaudible and saves
/// most of the per-sample trig work.
const COEFF_UPDATE_INTERVAL: u32 = 16;

/// Phaser effect.
///
/// | Parameter | Range | Default |
/// |-----------|-------|---------|
/// | rate | 0.01–2.0 Hz | 0.2 |
/// | depth | 0.05–1.0 | 0.2 |
/// | center frequency | 20–20000 Hz | 1000 |
/// | feedback | -1.0–1.0 | 0.0 |
/// | mix | 0.01–1.0 | 0.05 |
#[derive(Debug, Clone)]
pub struct Phaser {
    allpass_l: [FirstOrderAllpass; STAGES],
    allpass_r: [FirstOrderAllpass; STAGES],
    lfo: Lfo,
    rate: SmoothedParam,
    depth: SmoothedParam,
    center_freq: SmoothedParam,
    feedback: SmoothedParam,
    mix: SmoothedParam,
    feedback_l: f32,
    feedback_r: f32,
    coeff_counter: u32,
    sample_rate: f32,
}

impl Phaser {
    /// Create a phaser with default parameters.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            allpass_l: [FirstOrderAllpass::new(); STAGES],
            allpass_r: [FirstOrderAllpass::new(); STAGES],
            lfo: Lfo::new(sample_rate, 0.2),
            rate: SmoothedParam::standard(0.2, sample_rate),
            depth: SmoothedParam::standard(0.2, sample_rate),
            center_freq: SmoothedParam::standard(1000.0, sample_rate),
            feedback: SmoothedParam::standard(0.0, sample_rate),
            mix: SmoothedParam::standard(0.05, sample_rate),
            feedback_l: 0.0,
            feedback_r: 0.0,
            // 0 so the first sample computes coefficients immediately
            coeff_counter: 0,
            sample_rate,
        }
    }

    /// Set LFO rate in Hz.
    pub fn set_rate(&mut self, rate_hz: f32) {
        self.rate.set_target(rate_hz.clamp(0.01, 2.0));
    }

    /// Set sweep depth (0.05-1).
    pub fn set_depth(&mut self, depth: f32) {
        self.depth.set_target(depth.clamp(0.05, 1.0));
    }

    /// Set sweep center frequency in Hz.
    pub fn set_center_freq(&mut self, freq_hz: f32) {
        self.center_freq.set_target(freq_hz.clamp(20.0, 20000.0));
    }

    /// Set feedback amount (-1 to 1).
    pub fn set_feedback(&mut self, feedback: f32) {
        self.feedback.set_target(feedback.clamp(-1.0, 1.0));
    }

    /// Set wet/dry mix (0.01-1).
    pub fn set_mix(&mut self, mix: f32) {
        self.mix.set_target(mix.clamp(0.01, 1.0));
    }

    fn update_coefficients(&mut self, sweep: f32, depth: f32, center: f32) {
        // Sweep multiplicatively around the center: equal musical distance
        // up and down.
        let freq = center * exp2f(sweep * depth * SWEEP_OCTAVES);
        for (l, r) in self.allpass_l.iter_mut().zip(self.allpass_r.iter_mut()) {
            l.set_frequency(freq, self.sample_rate);
            r.set_frequency(freq, self.sample_rate);
        }
    }
}

impl Effect for Phaser {
    #[inline]
    fn process_sample(&mut self, left: f32, right: f32) -> (f32, f32) {
        let rate = self.rate.advance();
        let depth = self.depth.advance();
        let center = self.center_freq.advance();
        let feedback = self.feedback.advance() * 0.95;
        let mix = self.mix.advance();

        self.lfo.set_frequency(rate);
        let sweep = self.lfo.advance();

        if self.coeff_counter == 0 {
            self.update_coefficients(sweep, depth, center);
            self.coeff_counter = COEFF_UPDATE_INTERVAL;
        }
        self.coeff_counter -= 1;

        let mut wet_l = left + self.feedback_l * feedback;
        for ap in &mut self.allpass_l {
            wet_l = ap.process(wet_l);
        }
        self.feedback_l = wet_l;

        let mut wet_r = right + self.feedback_r * feedback;
        for ap in &mut self.allpass_r {
            wet_r = ap.process(wet_r);
        }
        self.feedback_r = wet_r;

        (
            wet_dry_mix(left, wet_l, mix),
            wet_dry_mix(right, wet_r, mix),
        )
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.lfo.set_sample_rate(sample_rate);
        self.rate.set_sample_rate(sample_rate);
        self.depth.set_sample_rate(sample_rate);
        self.center_freq.set_sample_rate(sample_rate);
        self.feedback.set_sample_rate(sample_rate);
        self.mix.set_sample_rate(sample_rate);
        self.coeff_counter = 0;
    }

    fn reset(&mut self) {
        for ap in self.allpass_l.iter_mut().chain(self.allpass_r.iter_mut()) {
            ap.reset();
        }
        self.lfo.reset();
        self.feedback_l = 0.0;
        self.feedback_r = 0.0;
        self.coeff_counter = 0;
        self.rate.snap_to_target();
        self.depth.snap_to_target();
        self.center_freq.snap_to_target();
        self.feedback.snap_to_target();
        self.mix.snap_to_target();
    }
}
