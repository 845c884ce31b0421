//! Stage ownership and dispatch.
//!
//! [`StageTable`] owns exactly one instance of each DSP stage for the life
//! of the engine. Instances are plain struct fields: they are never boxed
//! up, swapped, or reallocated, so `&mut` parameter writes from the control
//! layer always target the same live object the audio thread processes
//! through.
//!
//! [`StageBank`] is the dispatch seam between the engine and the stages.
//! Production code uses [`StageTable`]; tests substitute instrumented banks
//! that record the invocation sequence.

use cadena_core::Effect;
use cadena_effects::{Chorus, LadderFilter, Overdrive, Phaser};

use crate::stage::StageKind;

/// Maps a [`StageKind`] to a concrete stage and runs it over a block.
///
/// Called only from the audio thread, only with real stage kinds — the
/// engine skips `End` slots before dispatch.
pub trait StageBank {
    /// Process one stereo block in place through the stage named by `kind`.
    fn process_stage(&mut self, kind: StageKind, left: &mut [f32], right: &mut [f32]);
}

/// Owns one instance of each DSP stage.
pub struct StageTable {
    phaser: Phaser,
    chorus: Chorus,
    overdrive: Overdrive,
    ladder: LadderFilter,
}

impl StageTable {
    /// Construct all four stages at the given sample rate.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            phaser: Phaser::new(sample_rate),
            chorus: Chorus::new(sample_rate),
            overdrive: Overdrive::new(sample_rate),
            ladder: LadderFilter::new(sample_rate),
        }
    }

    /// Mutable access to the phaser (parameter updates).
    pub fn phaser_mut(&mut self) -> &mut Phaser {
        &mut self.phaser
    }

    /// Mutable access to the chorus (parameter updates).
    pub fn chorus_mut(&mut self) -> &mut Chorus {
        &mut self.chorus
    }

    /// Mutable access to the overdrive (parameter updates).
    pub fn overdrive_mut(&mut self) -> &mut Overdrive {
        &mut self.overdrive
    }

    /// Mutable access to the ladder filter (parameter updates).
    pub fn ladder_mut(&mut self) -> &mut LadderFilter {
        &mut self.ladder
    }

    /// Propagate a sample-rate change to every stage.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.phaser.set_sample_rate(sample_rate);
        self.chorus.set_sample_rate(sample_rate);
        self.overdrive.set_sample_rate(sample_rate);
        self.ladder.set_sample_rate(sample_rate);
    }

    /// Clear every stage's internal state.
    pub fn reset(&mut self) {
        self.phaser.reset();
        self.chorus.reset();
        self.overdrive.reset();
        self.ladder.reset();
    }
}

impl StageBank for StageTable {
    #[inline]
    fn process_stage(&mut self, kind: StageKind, left: &mut [f32], right: &mut [f32]) {
        match kind {
            StageKind::Phaser => self.phaser.process_block(left, right),
            StageKind::Chorus => self.chorus.process_block(left, right),
            StageKind::Overdrive => self.overdrive.process_block(left, right),
            StageKind::LadderFilter => self.ladder.process_block(left, right),
            // The engine skips End slots; reaching here means an order was
            // constructed outside the validated path. Fail loudly rather
            // than mask the bug.
            StageKind::End => unreachable!("sentinel slot dispatched as a stage"),
        }
    }
}
