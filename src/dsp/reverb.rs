//! Reverb engine
//!
//! Builds a synthetic tail by layering decaying, increasingly delayed
//! copies of the signal. Not a room simulation: each pass pads the
//! working buffer's front and overlays the input at the front window,
//! which yields a layered, front-loaded decay. That layering is the
//! defined output and is reproduced exactly.

use serde::{Deserialize, Serialize};

use crate::dsp::clip;
use crate::error::{Result, WaveshopError};

/// Parameters for the reverb engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverbParams {
    /// Per-iteration gain multiplier; iteration i is scaled by decay^i
    pub decay: f64,
    /// Number of layered copies
    pub iterations: u32,
}

impl Default for ReverbParams {
    fn default() -> Self {
        Self {
            decay: 0.5,
            iterations: 5,
        }
    }
}

impl ReverbParams {
    /// Validate parameters against their documented domains.
    pub fn validate(&self) -> Result<()> {
        if !self.decay.is_finite() {
            return Err(WaveshopError::InvalidParameter {
                param: "decay".to_string(),
                value: self.decay,
                expected: "finite value".to_string(),
            });
        }
        Ok(())
    }
}

/// Accumulate `iterations` decaying copies of `input` into a tail.
///
/// Iteration i (1-based) prepends `floor(frame_rate * 0.01 * i)` zeros
/// to the working buffer, then adds `input[j] * decay^i` into positions
/// `0..input.len()` of the grown buffer. The padding compounds, so
/// earlier layers keep shifting later while every new layer lands at
/// the front. The result is cut back to the input length and clipped.
pub fn apply_reverb(input: &[i16], decay: f64, iterations: u32, frame_rate: u32) -> Vec<i16> {
    let mut wet: Vec<f64> = input.iter().map(|&s| f64::from(s)).collect();

    for i in 1..=iterations {
        let delay_samples = (f64::from(frame_rate) * 0.01 * f64::from(i)) as usize;

        let mut grown = vec![0.0f64; delay_samples + wet.len()];
        grown[delay_samples..].copy_from_slice(&wet);

        let gain = decay.powi(i as i32);
        for (j, &sample) in input.iter().enumerate() {
            grown[j] += f64::from(sample) * gain;
        }

        wet = grown;
    }

    wet.truncate(input.len());
    clip(&wet)
}
