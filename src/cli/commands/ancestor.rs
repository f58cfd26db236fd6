//! Ancestor command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::AncestorArgs;
use crate::error::Result;
use crate::lexicon::Lexicon;

/// Lowest common ancestor of `words` as `name (specificity N)`
pub fn format_ancestor(lexicon: &mut Lexicon, words: &[String], fallback: &str) -> Result<String> {
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    let (specificity, concept) = lexicon.lowest_common_ancestor(&words, fallback)?;
    Ok(format!("{} (specificity {specificity})", concept.name()))
}

pub fn run_ancestor(args: AncestorArgs, level: LogLevel) -> std::result::Result<(), String> {
    let mut lexicon = super::open_lexicon(&args.lexicon)?;
    log(
        level,
        LogLevel::Verbose,
        &format!("Common ancestor of {}:", args.words.join(", ")),
    );
    let line = format_ancestor(&mut lexicon, &args.words, &args.fallback)
        .map_err(|e| format!("Ancestor error: {e}"))?;
    println!("{line}");
    Ok(())
}
