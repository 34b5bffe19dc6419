//! Saturating conversion from float workspaces to 16-bit samples
//!
//! Every engine that mixes in float space runs its result through
//! `clip` as the final step, emulating fixed-point audio instead of
//! letting hot mixes wrap around.

use num_traits::Float;

/// Saturate each sample to [-32768, 32767], then truncate toward zero.
pub fn clip<T: Float>(samples: &[T]) -> Vec<i16> {
    samples.iter().map(|&s| clip_sample(s)).collect()
}

fn clip_sample<T: Float>(sample: T) -> i16 {
    let value = sample.to_f64().unwrap_or(0.0);
    value.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}
