//! Echo engine
//!
//! Mixes a delayed, attenuated copy of the signal onto itself. The
//! output grows by the delay length so the echoed copy rings out past
//! the end of the original.

use serde::{Deserialize, Serialize};

use crate::dsp::clip;
use crate::error::{Result, WaveshopError};

/// Parameters for the echo engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EchoParams {
    /// Delay before the echoed copy starts, in seconds
    pub delay_seconds: f64,
    /// Gain applied to the echoed copy
    pub decay: f64,
}

impl Default for EchoParams {
    fn default() -> Self {
        Self {
            delay_seconds: 0.5,
            decay: 0.5,
        }
    }
}

impl EchoParams {
    /// Validate parameters against their documented domains.
    ///
    /// Any finite decay is allowed; a negative one inverts the echoed
    /// copy's polarity rather than being an error.
    pub fn validate(&self) -> Result<()> {
        if !self.delay_seconds.is_finite() || self.delay_seconds < 0.0 {
            return Err(WaveshopError::InvalidParameter {
                param: "delay_seconds".to_string(),
                value: self.delay_seconds,
                expected: "finite value >= 0".to_string(),
            });
        }
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

/// Mix a delayed, attenuated copy of `input` onto itself.
///
/// The output has length `input.len() + floor(delay_seconds *
/// frame_rate)`: the original occupies the front, and every sample is
/// additionally overlaid at its delayed position scaled by `decay`.
/// With a zero delay this degenerates to in-place additive doubling,
/// which falls straight out of the formula and is kept as-is.
pub fn apply_echo(input: &[i16], delay_seconds: f64, decay: f64, frame_rate: u32) -> Vec<i16> {
    let delay_samples = (delay_seconds * f64::from(frame_rate)) as usize;

    let mut mixed = vec![0.0f64; input.len() + delay_samples];
    for (slot, &sample) in mixed.iter_mut().zip(input.iter()) {
        *slot = f64::from(sample);
    }
    for (i, &sample) in input.iter().enumerate() {
        mixed[i + delay_samples] += f64::from(sample) * decay;
    }

    clip(&mixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_length_grows_by_delay() {
        let input = vec![100; 1000];
        let output = apply_echo(&input, 0.1, 0.5, 8000);
        assert_eq!(output.len(), 1800);
    }

    #[test]
    fn test_delay_is_floored() {
        // 0.0999 s at 8000 Hz is 799.2 samples; the delay truncates.
        let input = vec![0; 10];
        let output = apply_echo(&input, 0.0999, 0.5, 8000);
        assert_eq!(output.len(), 10 + 799);
    }

    #[test]
    fn test_impulse_produces_delayed_copy() {
        let mut input = vec![0i16; 8];
        input[0] = 1000;

        // delay of 4 samples at 1000 Hz
        let output = apply_echo(&input, 0.004, 0.5, 1000);

        assert_eq!(output.len(), 12);
        assert_eq!(output[0], 1000);
        assert_eq!(output[4], 500);
        assert!(output[1..4].iter().all(|&s| s == 0));
        assert!(output[5..].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_zero_delay_doubles_in_place() {
        let input = vec![100, -200, 300];
        let output = apply_echo(&input, 0.0, 1.0, 44100);
        assert_eq!(output, vec![200, -400, 600]);
    }

    #[test]
    fn test_negative_decay_inverts_echo() {
        let mut input = vec![0i16; 4];
        input[0] = 1000;

        let output = apply_echo(&input, 0.002, -1.0, 1000);
        assert_eq!(output[0], 1000);
        assert_eq!(output[2], -1000);
    }

    #[test]
    fn test_hot_mix_saturates() {
        let input = vec![32000];
        let output = apply_echo(&input, 0.0, 1.0, 1000);
        assert_eq!(output, vec![32767]);
    }

    #[test]
    fn test_empty_input() {
        let output = apply_echo(&[], 0.5, 0.5, 8000);
        // The zero-filled delay tail is still emitted.
        assert_eq!(output.len(), 4000);
        assert!(output.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_params_defaults() {
        let params = EchoParams::default();
        assert_eq!(params.delay_seconds, 0.5);
        assert_eq!(params.decay, 0.5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_reject_negative_delay() {
        let params = EchoParams {
            delay_seconds: -0.1,
            decay: 0.5,
        };
        assert!(matches!(
            params.validate(),
            Err(WaveshopError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_params_reject_nan_decay() {
        let params = EchoParams {
            delay_seconds: 0.5,
            decay: f64::NAN,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_params_allow_negative_decay() {
        let params = EchoParams {
            delay_seconds: 0.5,
            decay: -0.8,
        };
        assert!(params.validate().is_ok());
    }
}
