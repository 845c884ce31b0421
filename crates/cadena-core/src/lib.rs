//! Cadena Core - DSP primitives for the effect chain
//!
//! Foundational building blocks for the cadena effect stages, designed for
//! real-time processing with zero allocation in the audio path.
//!
//! # Core Abstractions
//!
//! - [`Effect`] - Object-safe trait for all audio effects
//! - [`SmoothedParam`] - Exponential parameter smoothing (zipper-free changes)
//! - [`Lfo`] - Low-frequency oscillator for modulation effects
//! - [`InterpolatedDelay`] - Variable-length delay line with linear interpolation
//! - [`FirstOrderAllpass`] - Phase-shift section for phaser sweeps
//! - [`OnePole`] - One-pole lowpass, the ladder filter's building block
//! - Math helpers: [`db_to_linear`], [`fast_tanh`], [`wet_dry_mix`], etc.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! cadena-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: no allocations in processing paths
//! - **No dependence on std math**: `libm` throughout
//! - **Object-safe traits**: dynamic dispatch where the chain needs it

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod allpass;
pub mod delay;
pub mod effect;
pub mod lfo;
pub mod math;
pub mod one_pole;
pub mod param;

pub use allpass::FirstOrderAllpass;
pub use delay::InterpolatedDelay;
pub use effect::Effect;
pub use lfo::{Lfo, LfoWaveform};
pub use math::{
    db_to_linear, fast_tanh, flush_denormal, linear_to_db, ms_to_samples, soft_clip, wet_dry_mix,
};
pub use one_pole::OnePole;
pub use param::SmoothedParam;
