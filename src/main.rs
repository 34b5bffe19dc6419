//! Waveshop CLI - Waveform Effects Processor
//!
//! Command-line interface for the Waveshop audio effects engines.

use clap::Parser;
use env_logger::Env;
use log::info;

use waveshop::cli::{commands, Cli, Commands};
use waveshop::dsp::{EchoParams, ReverbParams, SpeedParams, Transform, TrimParams};

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Waveshop v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(cli) {
        // Structured payload so callers can match on the error kind.
        let payload = serde_json::json!({
            "error": err.to_string(),
            "code": err.error_code(),
        });
        eprintln!("{payload}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> waveshop::Result<()> {
    let (transform, input, output) = match cli.command {
        Commands::Echo {
            input,
            output,
            delay,
            decay,
        } => (
            Transform::Echo(EchoParams {
                delay_seconds: delay,
                decay,
            }),
            input,
            output,
        ),
        Commands::Reverb {
            input,
            output,
            decay,
            iterations,
        } => (
            Transform::Reverb(ReverbParams { decay, iterations }),
            input,
            output,
        ),
        Commands::Trim {
            input,
            output,
            start,
            end,
        } => (
            Transform::Trim(TrimParams {
                start_seconds: start,
                end_seconds: end,
            }),
            input,
            output,
        ),
        Commands::Speed {
            input,
            output,
            factor,
        } => (Transform::Speed(SpeedParams { factor }), input, output),
    };

    commands::apply(&transform, &input, &output)
}
