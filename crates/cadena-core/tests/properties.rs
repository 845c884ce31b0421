//! Property-based tests for cadena-core DSP primitives.
//!
//! Tests filter stability, parameter convergence, delay line integrity, and
//! LFO range using proptest for randomized input generation.

use proptest::prelude::*;
use cadena_core::{FirstOrderAllpass, InterpolatedDelay, Lfo, LfoWaveform, OnePole, SmoothedParam};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any center frequency (20-20000 Hz), the first-order allpass
    /// produces finite output for random finite input in [-1, 1].
    #[test]
    fn allpass_stability(
        freq in 20.0f32..20000.0f32,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut ap = FirstOrderAllpass::new();
        ap.set_frequency(freq, 48000.0);

        for &sample in &input {
            let out = ap.process(sample);
            prop_assert!(
                out.is_finite(),
                "allpass (freq={}) produced non-finite output {} for input {}",
                freq, out, sample
            );
        }
    }

    /// For any cutoff (20-20000 Hz), the one-pole lowpass stays finite and
    /// never exceeds the peak of its bounded input.
    #[test]
    fn one_pole_stability(
        freq in 20.0f32..20000.0f32,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut lp = OnePole::new(48000.0, freq);

        for &sample in &input {
            let out = lp.process(sample);
            prop_assert!(
                out.is_finite() && out.abs() <= 1.0 + 1e-6,
                "one-pole (freq={}) produced out-of-range output {} for input {}",
                freq, out, sample
            );
        }
    }

    /// SmoothedParam converges toward its target value.
    /// Uses `standard()` (20ms time constant at 48kHz, coeff ≈ 0.00104).
    ///
    /// f32 precision limits exact convergence: the one-pole step
    /// `current += coeff * (target - current)` stalls when the step rounds
    /// to zero, at roughly `ULP(target) / coeff`. We verify convergence
    /// within that precision bound.
    #[test]
    fn smoothed_param_convergence(
        initial in -100.0f32..100.0f32,
        target in -100.0f32..100.0f32,
    ) {
        let mut param = SmoothedParam::standard(initial, 48000.0);
        param.set_target(target);

        // 20000 samples (~417ms, >20 time constants) is enough to reach the
        // f32 precision floor for any value in [-100, 100].
        for _ in 0..20000 {
            param.advance();
        }

        // ULP(target) / coeff, plus a small floor for targets near zero.
        let precision_floor = target.abs() * f32::EPSILON / 0.001 + 1e-4;
        let diff = (param.get() - target).abs();
        prop_assert!(
            diff < precision_floor,
            "SmoothedParam did not converge: initial={}, target={}, got={}, diff={}, tol={}",
            initial, target, param.get(), diff, precision_floor
        );
    }

    /// Write N random samples to InterpolatedDelay, read them back at
    /// integer delays — they must match exactly (no interpolation error at
    /// integer positions).
    #[test]
    fn delay_line_integrity(
        samples in prop::collection::vec(-1.0f32..=1.0f32, 1..=64),
    ) {
        let n = samples.len();
        let mut delay = InterpolatedDelay::new(n + 1);

        for &s in &samples {
            delay.write(s);
        }

        // delay=0 is the last written sample, delay=1 the one before it.
        for (i, &expected) in samples.iter().rev().enumerate() {
            let got = delay.read(i as f32);
            prop_assert!(
                (got - expected).abs() < 1e-6,
                "delay mismatch at delay={}: expected {}, got {}",
                i, expected, got
            );
        }
    }

    /// Both waveforms stay inside [-1, 1] for any rate and phase offset.
    #[test]
    fn lfo_output_in_range(
        freq in 0.01f32..20.0f32,
        phase in 0.0f32..1.0f32,
        waveform_idx in 0usize..2,
    ) {
        let mut lfo = Lfo::new(48000.0, freq);
        lfo.set_waveform(if waveform_idx == 0 {
            LfoWaveform::Sine
        } else {
            LfoWaveform::Triangle
        });
        lfo.set_phase(phase);

        for _ in 0..4096 {
            let v = lfo.advance();
            prop_assert!(
                (-1.0..=1.0).contains(&v),
                "LFO (freq={}, phase={}) out of range: {}",
                freq, phase, v
            );
        }
    }
}
