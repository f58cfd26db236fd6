//! Play command implementation

use std::io;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::PlayArgs;
use crate::puzzle::{play, SamplerConfig};

pub fn run_play(args: PlayArgs, level: LogLevel) -> Result<(), String> {
    let mut generator =
        super::open_generator(&args.lexicon, &args.root, SamplerConfig::default(), args.seed)?;
    let puzzles = generator
        .batch_generate(args.count)
        .map_err(|e| format!("Generation error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Find the word that does not belong. {} puzzles, {} lives.",
            puzzles.len(),
            args.lives
        ),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = play(
        &puzzles,
        args.lives,
        &mut stdin.lock(),
        &mut stdout.lock(),
        generator.rng_mut(),
    )
    .map_err(|e| format!("Game error: {e}"))?;

    tracing::info!(
        score = summary.score,
        answered = summary.answered,
        lives_left = summary.lives_left,
        "game finished"
    );
    Ok(())
}
