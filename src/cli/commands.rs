//! CLI command implementations
//!
//! Implements the load → transform → save flow shared by every
//! subcommand.

use std::path::Path;

use log::info;

use crate::audio::{load_wav, save_wav};
use crate::dsp::Transform;
use crate::error::Result;

/// Load a WAV file, run one transform, and write the result.
///
/// The output file is only created after the transform has succeeded,
/// so a failed request never leaves partial output behind.
pub fn apply(transform: &Transform, input: &Path, output: &Path) -> Result<()> {
    info!("Applying {} to {}", transform.name(), input.display());

    let buffer = load_wav(input)?;
    let input_frames = buffer.num_frames();

    let processed = transform.apply(&buffer)?;

    save_wav(&processed, output)?;

    println!(
        "{}: {} -> {} ({} -> {} frames at {} Hz)",
        transform.name(),
        input.display(),
        output.display(),
        input_frames,
        processed.num_frames(),
        processed.sample_rate(),
    );

    Ok(())
}
