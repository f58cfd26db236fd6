//! Oddword CLI
//!
//! # Usage
//!
//! ```bash
//! # Run a curriculum
//! oddword train configs/sample.yaml
//!
//! # Train with overrides
//! oddword train configs/sample.yaml --epochs 300 --seed 7
//!
//! # Validate config
//! oddword validate configs/sample.yaml --detailed
//!
//! # Inspect the hierarchy
//! oddword chain -x data/sample_lexicon.yaml poodle.n.01
//! oddword ancestor -x data/sample_lexicon.yaml poodle wolf
//!
//! # Sample puzzles, optionally scored by a trained checkpoint
//! oddword puzzles -x data/sample_lexicon.yaml canine.n.02 --model output/best_model.json
//!
//! # Play
//! oddword play -x data/sample_lexicon.yaml animal.n.01
//! ```

use clap::Parser;
use oddword::cli::{run_command, Cli, LogLevel};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over the -v/-q flags.
    let level = LogLevel::from_flags(cli.verbose, cli.quiet).tracing_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
