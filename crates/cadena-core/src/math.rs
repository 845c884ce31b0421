//! Audio math helpers shared by the stages.

use libm::{expf, log10f, powf};

/// Convert decibels to linear gain.
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    powf(10.0, db / 20.0)
}

/// Convert linear gain to decibels. Clamped at -100 dB for zero/negative input.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -100.0
    } else {
        20.0 * log10f(linear)
    }
}

/// Fast tanh approximation for waveshaping.
///
/// Rational approximation accurate to ~0.03% over [-4.5, 4.5], hard-limited
/// to ±1 beyond that. Avoids the cost of a true `tanhf` per sample.
#[inline]
pub fn fast_tanh(x: f32) -> f32 {
    if x.abs() >= 4.5 {
        return if x > 0.0 { 1.0 } else { -1.0 };
    }
    let x2 = x * x;
    x * (27.0 + x2) / (27.0 + 9.0 * x2)
}

/// Smooth saturation: tanh-shaped soft clipper.
#[inline]
pub fn soft_clip(x: f32) -> f32 {
    fast_tanh(x)
}

/// Crossfade between a dry and wet signal. `mix` 0 = dry, 1 = wet.
#[inline]
pub fn wet_dry_mix(dry: f32, wet: f32, mix: f32) -> f32 {
    dry + (wet - dry) * mix
}

/// Convert milliseconds to samples at the given rate.
#[inline]
pub fn ms_to_samples(ms: f32, sample_rate: f32) -> f32 {
    ms * 0.001 * sample_rate
}

/// Flush denormal float values to zero.
///
/// Denormals make feedback paths orders of magnitude slower on x86; any
/// value below 1e-20 is inaudible and safe to zero.
#[inline]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

/// One-pole smoothing coefficient for a cutoff in Hz.
#[inline]
pub fn onepole_coeff(freq_hz: f32, sample_rate: f32) -> f32 {
    expf(-core::f32::consts::TAU * freq_hz / sample_rate)
}
