//! Command-line interface
//!
//! One subcommand per engine, carrying the documented parameter
//! defaults. The argument structs deliberately mirror the engine
//! parameter objects one to one.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI arguments
#[derive(Parser)]
#[command(
    name = "waveshop",
    version,
    about = "Waveform effects for 16-bit PCM WAV audio"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// One subcommand per transformation engine
#[derive(Subcommand)]
pub enum Commands {
    /// Mix a delayed, attenuated copy of the signal onto itself
    Echo {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
        /// Delay before the echo starts, in seconds
        #[arg(long, default_value_t = 0.5)]
        delay: f64,
        /// Gain applied to the echoed copy
        #[arg(long, default_value_t = 0.5)]
        decay: f64,
    },
    /// Layer decaying, increasingly delayed copies of the signal
    Reverb {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
        /// Per-iteration gain multiplier
        #[arg(long, default_value_t = 0.5)]
        decay: f64,
        /// Number of layered copies
        #[arg(long, default_value_t = 5)]
        iterations: u32,
    },
    /// Keep only the samples between two points in time
    Trim {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
        /// Start of the kept range, in seconds
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        /// End of the kept range, in seconds; 0 keeps to the end
        #[arg(long, default_value_t = 0.0)]
        end: f64,
    },
    /// Resample to change playback speed (pitch shifts with it)
    Speed {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
        /// Speed multiplier; 2.0 halves the duration
        #[arg(long, default_value_t = 1.0)]
        factor: f64,
    },
}
