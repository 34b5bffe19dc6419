//! Error types for Waveshop
//!
//! All fallible operations return WaveshopError. Every variant carries
//! a stable code so the CLI boundary can emit a structured failure
//! payload that callers can match on.

use thiserror::Error;

/// Result type alias using WaveshopError
pub type Result<T> = std::result::Result<T, WaveshopError>;

/// All possible errors in Waveshop
#[derive(Error, Debug)]
pub enum WaveshopError {
    // Codec errors
    #[error("Failed to decode WAV data: {reason}")]
    Decode {
        reason: String,
        #[source]
        source: hound::Error,
    },

    #[error("Failed to encode WAV data: {reason}")]
    Encode {
        reason: String,
        #[source]
        source: hound::Error,
    },

    #[error("Unsupported audio format: {details}")]
    UnsupportedFormat { details: String },

    // Boundary validation
    #[error("Invalid effect parameter: {param} = {value} (expected {expected})")]
    InvalidParameter {
        param: String,
        value: f64,
        expected: String,
    },

    // Generic I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WaveshopError {
    /// Stable code for the structured error payload.
    pub fn error_code(&self) -> &'static str {
        match self {
            WaveshopError::Decode { .. } => "DECODE_FAILURE",
            WaveshopError::Encode { .. } => "ENCODE_FAILURE",
            WaveshopError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            WaveshopError::InvalidParameter { .. } => "INVALID_PARAMETER",
            WaveshopError::Io(_) => "IO_ERROR",
            WaveshopError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = WaveshopError::InvalidParameter {
            param: "factor".to_string(),
            value: -1.0,
            expected: "finite value > 0".to_string(),
        };
        assert_eq!(err.error_code(), "INVALID_PARAMETER");

        let err = WaveshopError::UnsupportedFormat {
            details: "32-bit float".to_string(),
        };
        assert_eq!(err.error_code(), "UNSUPPORTED_FORMAT");
    }

    #[test]
    fn test_invalid_parameter_message() {
        let err = WaveshopError::InvalidParameter {
            param: "delay_seconds".to_string(),
            value: -0.5,
            expected: "finite value >= 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid effect parameter: delay_seconds = -0.5 (expected finite value >= 0)"
        );
    }
}
