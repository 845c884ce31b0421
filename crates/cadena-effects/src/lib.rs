//! Audio effect stages for the cadena chain.
//!
//! Four stages, one per slot of the reorderable chain:
//!
//! - [`Phaser`] - swept allpass cascade with feedback
//! - [`Chorus`] - LFO-modulated delay line
//! - [`Overdrive`] - saturating waveshaper
//! - [`LadderFilter`] - four-pole cascade with six mode taps
//!
//! All stages implement [`Effect`](cadena_core::Effect) and are driven by the
//! chain engine through in-place stereo block processing. Parameters are
//! smoothed, so control-thread writes never produce zipper noise.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod chorus;
pub mod ladder;
pub mod overdrive;
pub mod phaser;

pub use chorus::Chorus;
pub use ladder::{LadderFilter, LadderMode};
pub use overdrive::Overdrive;
pub use phaser::Phaser;
