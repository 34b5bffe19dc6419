//! Trim engine
//!
//! Pure selection of a time-bounded sample range; no mixing, no
//! clipping.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaveshopError};

/// Parameters for the trim engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimParams {
    /// Start of the kept range, in seconds
    pub start_seconds: f64,
    /// End of the kept range, in seconds; zero or less keeps to the end
    pub end_seconds: f64,
}

impl Default for TrimParams {
    fn default() -> Self {
        Self {
            start_seconds: 0.0,
            end_seconds: 0.0,
        }
    }
}

impl TrimParams {
    /// Validate parameters against their documented domains.
    pub fn validate(&self) -> Result<()> {
        if !self.start_seconds.is_finite() || self.start_seconds < 0.0 {
            return Err(WaveshopError::InvalidParameter {
                param: "start_seconds".to_string(),
                value: self.start_seconds,
                expected: "finite value >= 0".to_string(),
            });
        }
        if !self.end_seconds.is_finite() {
            return Err(WaveshopError::InvalidParameter {
                param: "end_seconds".to_string(),
                value: self.end_seconds,
                expected: "finite value".to_string(),
            });
        }
        Ok(())
    }
}

/// Keep only the samples between `start_seconds` and `end_seconds`.
///
/// Frame indices are floored from the time bounds and clamped to the
/// buffer; a start at or past the end (or past the buffer) yields an
/// empty result rather than an error.
pub fn trim(input: &[i16], start_seconds: f64, end_seconds: f64, frame_rate: u32) -> Vec<i16> {
    let start_frame = (start_seconds * f64::from(frame_rate)) as usize;
    let end_frame = if end_seconds > 0.0 {
        (end_seconds * f64::from(frame_rate)) as usize
    } else {
        input.len()
    };

    let start = start_frame.min(input.len());
    let end = end_frame.min(input.len());
    if start >= end {
        return Vec::new();
    }

    input[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_full_range_is_identity() {
        let input: Vec<i16> = (0..100).collect();
        assert_eq!(trim(&input, 0.0, 0.0, 8000), input);
    }

    #[test]
    fn test_exact_end_boundary() {
        // end lands exactly on the buffer length: all samples kept.
        let input = vec![1000; 100];
        assert_eq!(trim(&input, 0.0, 0.01, 10000), input);
    }

    #[test]
    fn test_interior_range() {
        let input: Vec<i16> = (0..10).collect();
        // 0.2 s..0.6 s at 10 Hz = frames 2..6
        assert_eq!(trim(&input, 0.2, 0.6, 10), vec![2, 3, 4, 5]);
    }

    #[test_case(1.0, 0.0; "start at duration")]
    #[test_case(5.0, 0.0; "start past duration")]
    #[test_case(0.5, 0.2; "start after end")]
    #[test_case(0.3, 0.3; "start equals end")]
    fn trim_yields_empty(start: f64, end: f64) {
        let input = vec![100; 1000];
        assert!(trim(&input, start, end, 1000).is_empty());
    }

    #[test]
    fn test_end_clamped_to_length() {
        let input = vec![7; 50];
        assert_eq!(trim(&input, 0.0, 100.0, 1000), input);
    }

    #[test]
    fn test_negative_end_means_to_end() {
        let input: Vec<i16> = (0..10).collect();
        assert_eq!(trim(&input, 0.5, -1.0, 10), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_frames_are_floored() {
        let input: Vec<i16> = (0..10).collect();
        // 0.19 s at 10 Hz floors to frame 1
        assert_eq!(trim(&input, 0.19, 0.0, 10), (1..10).collect::<Vec<i16>>());
    }

    #[test]
    fn test_empty_input() {
        assert!(trim(&[], 0.0, 0.0, 8000).is_empty());
    }

    #[test]
    fn test_params_defaults() {
        let params = TrimParams::default();
        assert_eq!(params.start_seconds, 0.0);
        assert_eq!(params.end_seconds, 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_reject_negative_start() {
        let params = TrimParams {
            start_seconds: -1.0,
            end_seconds: 0.0,
        };
        assert!(matches!(
            params.validate(),
            Err(WaveshopError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_params_allow_negative_end() {
        let params = TrimParams {
            start_seconds: 0.0,
            end_seconds: -3.0,
        };
        assert!(params.validate().is_ok());
    }
}
