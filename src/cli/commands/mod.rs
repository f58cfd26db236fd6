//! CLI command implementations

mod ancestor;
mod chain;
mod play;
mod puzzles;
mod train;
mod validate;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::cli::LogLevel;
use crate::config::{seeded_rng, Cli, Command};
use crate::lexicon::{load_lexicon, Lexicon};
use crate::puzzle::{PuzzleGenerator, SamplerConfig};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Train(args) => train::run_train(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Chain(args) => chain::run_chain(args, log_level),
        Command::Ancestor(args) => ancestor::run_ancestor(args, log_level),
        Command::Puzzles(args) => puzzles::run_puzzles(args, log_level),
        Command::Play(args) => play::run_play(args, log_level),
    }
}

fn open_lexicon(path: &Path) -> Result<Lexicon, String> {
    let graph = load_lexicon(path).map_err(|e| format!("Lexicon error: {e}"))?;
    Ok(Lexicon::new(graph))
}

fn open_generator(
    path: &Path,
    root: &str,
    sampler: SamplerConfig,
    seed: Option<u64>,
) -> Result<PuzzleGenerator, String> {
    let lexicon = open_lexicon(path)?;
    PuzzleGenerator::new(lexicon, root, sampler, seeded_rng(seed))
        .map_err(|e| format!("Generator error: {e}"))
}
