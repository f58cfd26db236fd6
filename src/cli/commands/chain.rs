//! Chain command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::ChainArgs;
use crate::error::Result;
use crate::lexicon::Lexicon;

/// Canonical chain of `concept`, one line per step from the concept to its root
pub fn format_chain(lexicon: &mut Lexicon, concept: &str) -> Result<Vec<String>> {
    let chain = lexicon.chain_with_specificity(concept)?;
    let mut lines = Vec::with_capacity(chain.len());
    for (step, specificity) in chain {
        let flatness = lexicon.flatness(step.name())?;
        lines.push(format!(
            "{:<28} specificity {:>6}  flatness {:.3}",
            step.name(),
            specificity,
            flatness
        ));
    }
    Ok(lines)
}

pub fn run_chain(args: ChainArgs, level: LogLevel) -> std::result::Result<(), String> {
    let mut lexicon = super::open_lexicon(&args.lexicon)?;
    let lines = format_chain(&mut lexicon, &args.concept).map_err(|e| format!("Chain error: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!("Hypernym chain of {}:", args.concept),
    );
    // The chain is the command's result, so it prints even when quiet.
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
