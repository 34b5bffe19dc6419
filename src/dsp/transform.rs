//! Uniform dispatch over the four engines
//!
//! The boundary layer works in terms of one `Transform` value: a
//! tagged request that knows how to validate its parameters and run
//! the matching engine against a buffer.

use serde::{Deserialize, Serialize};

use crate::audio::AudioBuffer;
use crate::dsp::{
    apply_echo, apply_reverb, change_speed, trim, EchoParams, ReverbParams, SpeedParams,
    TrimParams,
};
use crate::error::Result;

/// One transformation request, ready to run against a buffer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Transform {
    Echo(EchoParams),
    Reverb(ReverbParams),
    Trim(TrimParams),
    Speed(SpeedParams),
}

impl Transform {
    /// Short name of the engine this request targets.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Echo(_) => "echo",
            Transform::Reverb(_) => "reverb",
            Transform::Trim(_) => "trim",
            Transform::Speed(_) => "speed",
        }
    }

    /// Check every parameter against its documented domain.
    pub fn validate(&self) -> Result<()> {
        match self {
            Transform::Echo(params) => params.validate(),
            Transform::Reverb(params) => params.validate(),
            Transform::Trim(params) => params.validate(),
            Transform::Speed(params) => params.validate(),
        }
    }

    /// Validate, run the engine, and re-wrap the result with its
    /// format metadata.
    ///
    /// Only `Speed` changes the frame rate; no engine touches the
    /// channel count.
    pub fn apply(&self, buffer: &AudioBuffer) -> Result<AudioBuffer> {
        self.validate()?;

        let frame_rate = buffer.sample_rate();
        let (samples, new_rate) = match self {
            Transform::Echo(params) => (
                apply_echo(
                    buffer.samples(),
                    params.delay_seconds,
                    params.decay,
                    frame_rate,
                ),
                frame_rate,
            ),
            Transform::Reverb(params) => (
                apply_reverb(buffer.samples(), params.decay, params.iterations, frame_rate),
                frame_rate,
            ),
            Transform::Trim(params) => (
                trim(
                    buffer.samples(),
                    params.start_seconds,
                    params.end_seconds,
                    frame_rate,
                ),
                frame_rate,
            ),
            Transform::Speed(params) => change_speed(buffer.samples(), params.factor, frame_rate),
        };

        AudioBuffer::new(samples, buffer.channels(), new_rate)
    }
}
