//! Speed engine
//!
//! Changes playback speed tape-style: the buffer is resampled to
//! `floor(len / factor)` samples and the caller is handed a new frame
//! rate of `round(rate * factor)`. Pitch and tempo shift together.
//!
//! Resampling is frequency-domain: the buffer is treated as one period
//! of a periodic signal, its spectrum is resized with proper handling
//! of the shared Nyquist bin, and the inverse transform reconstructs
//! the signal at the new length. This is ideal band-limited
//! resampling, not interpolation.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};

use crate::dsp::clip;
use crate::error::{Result, WaveshopError};

/// Parameters for the speed engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedParams {
    /// Speed multiplier; 2.0 halves the sample count
    pub factor: f64,
}

impl Default for SpeedParams {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

impl SpeedParams {
    /// Validate parameters against their documented domains.
    ///
    /// The engine itself never checks the factor; a non-positive value
    /// has no defined meaning, so it is rejected here at the boundary.
    pub fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() || self.factor <= 0.0 {
            return Err(WaveshopError::InvalidParameter {
                param: "factor".to_string(),
                value: self.factor,
                expected: "finite value > 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Resample `input` to `floor(len / speed_factor)` samples and report
/// the frame rate the result should be played back at.
///
/// The returned buffer is saturated into sample range before the final
/// integer truncation. The caller owns persisting the new frame rate
/// next to the samples; the engine only reports it.
pub fn change_speed(input: &[i16], speed_factor: f64, frame_rate: u32) -> (Vec<i16>, u32) {
    let target_len = (input.len() as f64 / speed_factor) as usize;
    let resampled = resample(input, target_len);
    let new_rate = (f64::from(frame_rate) * speed_factor).round() as u32;
    (clip(&resampled), new_rate)
}

/// Band-limited resampling of a periodic signal to `target_len`
/// samples.
///
/// Spectrum resizing keeps the lowest `min(len, target_len)` bins:
/// the positive-frequency half (plus DC) is copied to the front, the
/// negative-frequency half to the back. An even-length window's
/// Nyquist bin is shared between both halves, so it is folded with its
/// mirror when shrinking and split conjugate-symmetrically when
/// growing, keeping the reconstruction real-valued.
fn resample(input: &[i16], target_len: usize) -> Vec<f64> {
    let source_len = input.len();
    if source_len == 0 || target_len == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();

    let mut spectrum: Vec<Complex<f64>> = input
        .iter()
        .map(|&s| Complex::new(f64::from(s), 0.0))
        .collect();
    planner.plan_fft_forward(source_len).process(&mut spectrum);

    let mut resized = vec![Complex::new(0.0, 0.0); target_len];
    let kept = source_len.min(target_len);
    let positive_bins = kept / 2 + 1;
    let negative_bins = kept - positive_bins;

    resized[..positive_bins].copy_from_slice(&spectrum[..positive_bins]);
    for k in 0..negative_bins {
        resized[target_len - negative_bins + k] = spectrum[source_len - negative_bins + k];
    }

    if kept % 2 == 0 {
        let nyquist = kept / 2;
        if target_len < source_len {
            resized[nyquist] += spectrum[source_len - nyquist];
        } else if target_len > source_len {
            resized[nyquist] = resized[nyquist] * 0.5;
            resized[target_len - nyquist] = resized[nyquist].conj();
        }
    }

    planner.plan_fft_inverse(target_len).process(&mut resized);

    // rustfft leaves transforms unnormalized; the inverse's
    // 1/target_len and the target_len/source_len amplitude scale fold
    // into a single 1/source_len.
    let scale = 1.0 / source_len as f64;
    resized.into_iter().map(|c| c.re * scale).collect()
}
