//! Interpolated delay line for time-based effects.
//!
//! A circular buffer supporting fractional delay reads via linear
//! interpolation. The chorus stage modulates its read position every sample;
//! interpolating between adjacent samples keeps that modulation free of
//! stepping artifacts.
//!
//! The buffer is heap-allocated at construction and never reallocates, so
//! reads and writes are safe from the audio callback.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Circular delay line with linear-interpolated fractional reads.
#[derive(Debug, Clone)]
pub struct InterpolatedDelay {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl InterpolatedDelay {
    /// Create a delay line holding up to `max_delay_samples` samples.
    ///
    /// # Panics
    ///
    /// Panics if `max_delay_samples` is 0.
    pub fn new(max_delay_samples: usize) -> Self {
        assert!(max_delay_samples > 0, "delay capacity must be > 0");
        Self {
            buffer: vec![0.0; max_delay_samples],
            write_pos: 0,
        }
    }

    /// Create a delay line sized for `max_ms` milliseconds at `sample_rate`.
    pub fn from_ms(sample_rate: f32, max_ms: f32) -> Self {
        Self::new((sample_rate * max_ms * 0.001) as usize + 1)
    }

    /// Read a sample delayed by `delay_samples` (fractional allowed).
    ///
    /// Delays beyond the capacity are clamped to the oldest stored sample.
    #[inline]
    pub fn read(&self, delay_samples: f32) -> f32 {
        debug_assert!(delay_samples >= 0.0);

        let len = self.buffer.len();
        let clamped = delay_samples.min((len - 1) as f32);
        let whole = clamped as usize;
        let frac = clamped - whole as f32;

        // Position `whole` samples behind the most recent write.
        let pos = (self.write_pos + len - whole - 1) % len;
        let older = (pos + len - 1) % len;

        let a = self.buffer[pos];
        let b = self.buffer[older];
        a + (b - a) * frac
    }

    /// Write a sample and advance the write position.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Zero the buffer contents.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }

    /// Maximum delay in samples.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
}
