//! Ladder filter stage: four-pole cascade with resonance and drive.
//!
//! A digital take on the classic transistor-ladder topology: four one-pole
//! lowpass sections in series, resonance fed back from the last pole to the
//! input, and a saturating drive at the input to keep the feedback loop
//! bounded. The six modes tap different points of the cascade.

use cadena_core::{Effect, OnePole, SmoothedParam, fast_tanh};

/// Poles in the cascade.
const POLES: usize = 4;

/// Mode taps for the ladder cascade.
///
/// 12 dB/octave modes tap after two poles, 24 dB modes after four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LadderMode {
    /// Low pass, 12 dB/octave (default).
    #[default]
    Lpf12,
    /// High pass, 12 dB/octave.
    Hpf12,
    /// Band pass, 12 dB/octave.
    Bpf12,
    /// Low pass, 24 dB/octave.
    Lpf24,
    /// High pass, 24 dB/octave.
    Hpf24,
    /// Band pass, 24 dB/octave.
    Bpf24,
}

impl LadderMode {
    /// All modes, in selector order.
    pub const ALL: [LadderMode; 6] = [
        LadderMode::Lpf12,
        LadderMode::Hpf12,
        LadderMode::Bpf12,
        LadderMode::Lpf24,
        LadderMode::Hpf24,
        LadderMode::Bpf24,
    ];

    /// Display label for a selector UI.
    pub fn label(self) -> &'static str {
        match self {
            LadderMode::Lpf12 => "LPF12",
            LadderMode::Hpf12 => "HPF12",
            LadderMode::Bpf12 => "BPF12",
            LadderMode::Lpf24 => "LPF24",
            LadderMode::Hpf24 => "HPF24",
            LadderMode::Bpf24 => "BPF24",
        }
    }
}

/// Per-channel cascade state.
#[derive(Debug, Clone)]
struct Channel {
    poles: [OnePole; POLES],
    feedback: f32,
}

impl Channel {
    fn new(sample_rate: f32, cutoff: f32) -> Self {
        Self {
            poles: core::array::from_fn(|_| OnePole::new(sample_rate, cutoff)),
            feedback: 0.0,
        }
    }

    #[inline]
    fn process(&mut self, input: f32, resonance_gain: f32, drive: f32, mode: LadderMode) -> f32 {
        // Drive saturation bounds the resonance loop.
        let shaped = fast_tanh((input - resonance_gain * self.feedback) * drive);

        let y1 = self.poles[0].process(shaped);
        let y2 = self.poles[1].process(y1);
        let y3 = self.poles[2].process(y2);
        let y4 = self.poles[3].process(y3);
        self.feedback = y4;

        match mode {
            LadderMode::Lpf12 => y2,
            LadderMode::Hpf12 => shaped - y2,
            LadderMode::Bpf12 => y1 - y2,
            LadderMode::Lpf24 => y4,
            LadderMode::Hpf24 => shaped - 2.0 * y2 + y4,
            LadderMode::Bpf24 => y2 - y4,
        }
    }

    fn reset(&mut self) {
        for pole in &mut self.poles {
            pole.reset();
        }
        self.feedback = 0.0;
    }
}

/// Ladder filter effect.
///
/// | Parameter | Range | Default |
/// |-----------|-------|---------|
/// | mode | [`LadderMode`] | LPF12 |
/// | cutoff | 20–20000 Hz | 20000 |
/// | resonance | 0.0–1.0 | 0.0 |
/// | drive | 1–100 | 1 |
#[derive(Debug, Clone)]
pub struct LadderFilter {
    left: Channel,
    right: Channel,
    mode: LadderMode,
    cutoff: SmoothedParam,
    resonance: SmoothedParam,
    drive: SmoothedParam,
    sample_rate: f32,
    last_cutoff: f32,
}

impl LadderFilter {
    /// Create a ladder filter, wide open by default.
    pub fn new(sample_rate: f32) -> Self {
        const DEFAULT_CUTOFF: f32 = 20000.0;
        Self {
            left: Channel::new(sample_rate, DEFAULT_CUTOFF),
            right: Channel::new(sample_rate, DEFAULT_CUTOFF),
            mode: LadderMode::default(),
            cutoff: SmoothedParam::standard(DEFAULT_CUTOFF, sample_rate),
            resonance: SmoothedParam::standard(0.0, sample_rate),
            drive: SmoothedParam::standard(1.0, sample_rate),
            sample_rate,
            last_cutoff: DEFAULT_CUTOFF,
        }
    }

    /// Select the mode tap.
    pub fn set_mode(&mut self, mode: LadderMode) {
        self.mode = mode;
    }

    /// Current mode tap.
    pub fn mode(&self) -> LadderMode {
        self.mode
    }

    /// Set cutoff frequency in Hz (20-20000).
    pub fn set_cutoff_hz(&mut self, cutoff: f32) {
        let nyquist_guard = self.sample_rate * 0.45;
        self.cutoff
            .set_target(cutoff.clamp(20.0, 20000.0).min(nyquist_guard));
    }

    /// Set resonance (0-1). 1 is on the edge of self-oscillation.
    pub fn set_resonance(&mut self, resonance: f32) {
        self.resonance.set_target(resonance.clamp(0.0, 1.0));
    }

    /// Set input drive (1-100).
    pub fn set_drive(&mut self, drive: f32) {
        self.drive.set_target(drive.clamp(1.0, 100.0));
    }

    fn update_pole_frequencies(&mut self, cutoff: f32) {
        for pole in self.left.poles.iter_mut().chain(self.right.poles.iter_mut()) {
            pole.set_frequency(cutoff);
        }
        self.last_cutoff = cutoff;
    }
}

impl Effect for LadderFilter {
    #[inline]
    fn process_sample(&mut self, left: f32, right: f32) -> (f32, f32) {
        let cutoff = self.cutoff.advance();
        let resonance = self.resonance.advance();
        let drive = self.drive.advance();

        if (cutoff - self.last_cutoff).abs() > 0.5 {
            self.update_pole_frequencies(cutoff);
        }

        // Map 0..1 resonance onto the stable feedback region. The drive
        // saturation keeps the loop bounded even at the top of the range.
        let resonance_gain = resonance * 3.8;
        // Compensate the drive's gain so the filter does not get louder as
        // drive rises.
        let normalized_drive = 1.0 + (drive - 1.0) * 0.1;

        let out_l = self
            .left
            .process(left, resonance_gain, normalized_drive, self.mode);
        let out_r = self
            .right
            .process(right, resonance_gain, normalized_drive, self.mode);
        (out_l, out_r)
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        for pole in self.left.poles.iter_mut().chain(self.right.poles.iter_mut()) {
            pole.set_sample_rate(sample_rate);
        }
        self.cutoff.set_sample_rate(sample_rate);
        self.resonance.set_sample_rate(sample_rate);
        self.drive.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
        self.cutoff.snap_to_target();
        self.resonance.snap_to_target();
        self.drive.snap_to_target();
        self.update_pole_frequencies(self.cutoff.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rms(signal: &[f32]) -> f32 {
        let sum_sq: f32 = signal.iter().map(|&s| s * s).sum();
        libm::sqrtf(sum_sq / signal.len() as f32)
    }

    fn run_sine(filter: &mut LadderFilter, freq_hz: f32, samples: usize) -> Vec<f32> {
        let mut out = Vec::with_capacity(samples);
        for n in 0..samples {
            let x = libm::sinf(core::f32::consts::TAU * freq_hz * n as f32 / 48000.0);
            let (l, _) = filter.process_sample(x, x);
            out.push(l);
        }
        out
    }

    #[test]
    fn wide_open_passes_signal() {
        let mut filter = LadderFilter::new(48000.0);
        filter.reset();
        let out = run_sine(&mut filter, 440.0, 9600);
        assert!(rms(&out[4800..]) > 0.5);
    }

    #[test]
    fn lowpass_attenuates_above_cutoff() {
        let mut filter = LadderFilter::new(48000.0);
        filter.set_mode(LadderMode::Lpf24);
        filter.set_cutoff_hz(200.0);
        filter.reset();
        let out = run_sine(&mut filter, 5000.0, 9600);
        let settled = rms(&out[4800..]);
        assert!(settled < 0.05, "5kHz through 200Hz LPF24: rms {settled}");
    }

    #[test]
    fn highpass_attenuates_below_cutoff() {
        let mut filter = LadderFilter::new(48000.0);
        filter.set_mode(LadderMode::Hpf12);
        filter.set_cutoff_hz(5000.0);
        filter.reset();
        let out = run_sine(&mut filter, 100.0, 9600);
        let settled = rms(&out[4800..]);
        assert!(settled < 0.2, "100Hz through 5kHz HPF12: rms {settled}");
    }

    #[test]
    fn all_modes_stay_finite_at_full_resonance() {
        for mode in LadderMode::ALL {
            let mut filter = LadderFilter::new(48000.0);
            filter.set_mode(mode);
            filter.set_cutoff_hz(800.0);
            filter.set_resonance(1.0);
            filter.set_drive(100.0);
            filter.reset();
            let out = run_sine(&mut filter, 440.0, 9600);
            assert!(
                out.iter().all(|s| s.is_finite() && s.abs() < 10.0),
                "{} blew up",
                mode.label()
            );
        }
    }

    #[test]
    fn mode_labels_match_selector_order() {
        let labels: Vec<_> = LadderMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            ["LPF12", "HPF12", "BPF12", "LPF24", "HPF24", "BPF24"]
        );
    }
}
