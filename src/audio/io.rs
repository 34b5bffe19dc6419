//! WAV codec boundary
//!
//! Decodes WAV containers into AudioBuffers and encodes them back,
//! using the hound crate. Only 16-bit integer PCM is accepted; the
//! engines are defined over that sample width and nothing else.

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;

use crate::audio::AudioBuffer;
use crate::error::{Result, WaveshopError};

const BITS_PER_SAMPLE: u16 = 16;

/// Decode a WAV container from any byte stream.
///
/// Fails with `Decode` when the container is malformed and with
/// `UnsupportedFormat` when the samples are not 16-bit integer PCM.
pub fn decode_wav<R: Read>(reader: R) -> Result<AudioBuffer> {
    let reader = WavReader::new(reader).map_err(|e| WaveshopError::Decode {
        reason: "not a valid WAV container".to_string(),
        source: e,
    })?;

    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != BITS_PER_SAMPLE {
        return Err(WaveshopError::UnsupportedFormat {
            details: format!(
                "{}-bit {:?} samples (only 16-bit integer PCM supported)",
                spec.bits_per_sample, spec.sample_format
            ),
        });
    }

    let samples = reader
        .into_samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, _>>()
        .map_err(|e| WaveshopError::Decode {
            reason: "truncated or corrupt sample data".to_string(),
            source: e,
        })?;

    debug!(
        "decoded {} samples at {} Hz ({} channel(s))",
        samples.len(),
        spec.sample_rate,
        spec.channels
    );

    AudioBuffer::new(samples, spec.channels, spec.sample_rate)
}

/// Load a WAV file into an AudioBuffer
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<AudioBuffer> {
    let file = File::open(path.as_ref())?;
    decode_wav(BufReader::new(file))
}

/// Encode an AudioBuffer as WAV container bytes.
///
/// The header is canonical uncompressed PCM: format tag 1, the
/// buffer's channel count and frame rate, 16 bits per sample.
pub fn encode_wav(buffer: &AudioBuffer) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_wav(buffer, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// Save an AudioBuffer to a WAV file (16-bit PCM)
pub fn save_wav<P: AsRef<Path>>(buffer: &AudioBuffer, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_wav(buffer, BufWriter::new(file))
}

fn write_wav<W: Write + Seek>(buffer: &AudioBuffer, writer: W) -> Result<()> {
    let spec = WavSpec {
        channels: buffer.channels(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::new(writer, spec).map_err(|e| WaveshopError::Encode {
        reason: "failed to start WAV stream".to_string(),
        source: e,
    })?;

    for &sample in buffer.samples() {
        writer
            .write_sample(sample)
            .map_err(|e| WaveshopError::Encode {
                reason: "failed to write sample data".to_string(),
                source: e,
            })?;
    }

    writer.finalize().map_err(|e| WaveshopError::Encode {
        reason: "failed to finalize WAV header".to_string(),
        source: e,
    })?;

    Ok(())
}
