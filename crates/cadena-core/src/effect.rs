//! Core [`Effect`] trait.
//!
//! Every stage in the chain implements this trait. The chain engine drives
//! stages exclusively through [`Effect::process_block`], which mutates a
//! stereo block in place — the output of one stage is the input of the next.
//!
//! ## Design Decisions
//!
//! - **In-place stereo blocks**: the engine hands each stage the same pair of
//!   channel buffers, so chaining needs no intermediate copies.
//! - **Object-safe**: the trait supports `dyn Effect` so a registry can hold
//!   heterogeneous stages behind one interface.
//! - **No allocations**: every method is callable from a real-time audio
//!   callback.

/// An audio effect that processes samples in place.
///
/// Implementors provide per-sample stereo processing; block processing has a
/// default implementation that loops over the buffers. Stages with internal
/// state (delay lines, filter memories) advance that state one sample per
/// call.
pub trait Effect {
    /// Process one stereo sample pair.
    ///
    /// Inputs are typically in `[-1.0, 1.0]`. Returns the processed pair.
    fn process_sample(&mut self, left: f32, right: f32) -> (f32, f32);

    /// Process a stereo block in place.
    ///
    /// Default implementation calls [`process_sample`](Self::process_sample)
    /// for each frame. Both slices must have the same length.
    fn process_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        debug_assert_eq!(left.len(), right.len());
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            (*l, *r) = self.process_sample(*l, *r);
        }
    }

    /// Update the sample rate.
    ///
    /// Stages recalculate any rate-dependent coefficients here (delay times
    /// in samples, LFO increments, filter coefficients).
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Clear internal state without changing parameters.
    ///
    /// Called when playback stops or restarts to avoid artifacts from stale
    /// delay-line or filter memory.
    fn reset(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gain(f32);

    impl Effect for Gain {
        fn process_sample(&mut self, left: f32, right: f32) -> (f32, f32) {
            (left * self.0, right * self.0)
        }

        fn set_sample_rate(&mut self, _sample_rate: f32) {}

        fn reset(&mut self) {}
    }

    #[test]
    fn block_default_matches_per_sample() {
        let mut gain = Gain(0.5);
        let mut left = [1.0, -1.0, 0.25, 0.0];
        let mut right = [0.5, 0.5, -0.5, 1.0];
        gain.process_block(&mut left, &mut right);
        assert_eq!(left, [0.5, -0.5, 0.125, 0.0]);
        assert_eq!(right, [0.25, 0.25, -0.25, 0.5]);
    }

    #[test]
    #[cfg(feature = "std")]
    fn dyn_dispatch_works() {
        let mut effect: Box<dyn Effect> = Box::new(Gain(2.0));
        let (l, r) = effect.process_sample(0.5, -0.5);
        assert_eq!((l, r), (1.0, -1.0));
    }
}
