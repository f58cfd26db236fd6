//! Puzzles command implementation

use std::path::Path;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::PuzzlesArgs;
use crate::error::{Error, Result};
use crate::model::{predict_presentation, TiedEmbeddingClassifier, TiedEmbeddingSnapshot};
use crate::puzzle::{Presentation, Puzzle, SamplerConfig, SpecificityBand, Vocabulary};
use crate::train::BestModelCheckpoint;

/// One puzzle as a line: shuffled words, then the answer and its ancestor
pub fn format_puzzle(index: usize, puzzle: &Puzzle, presentation: &Presentation) -> String {
    let words: Vec<&str> = presentation
        .slots()
        .iter()
        .map(|c| c.display_name())
        .collect();
    format!(
        "{:>3}. {}  [odd: {}, others under {}]",
        index + 1,
        words.join(", "),
        presentation.odd().display_name(),
        puzzle.ancestor().name()
    )
}

/// Load a checkpointed classifier and check it was trained on `vocab`
pub fn load_predictor(path: &Path, vocab: &Vocabulary) -> Result<TiedEmbeddingClassifier> {
    let checkpoint = BestModelCheckpoint::load::<TiedEmbeddingSnapshot>(path)?;
    let trained_on = &checkpoint.vocabulary;
    if trained_on.len() != vocab.len() {
        return Err(Error::Classifier(format!(
            "checkpoint for {} has a vocabulary of {} tokens, this root has {}",
            checkpoint.concept,
            trained_on.len(),
            vocab.len()
        )));
    }
    if let Some((saved, here)) = trained_on
        .tokens()
        .iter()
        .zip(vocab.tokens())
        .find(|(saved, here)| saved != here)
    {
        return Err(Error::Classifier(format!(
            "checkpoint for {} was trained on a different vocabulary ('{saved}' where this root has '{here}')",
            checkpoint.concept
        )));
    }

    let model = TiedEmbeddingClassifier::from_snapshot(checkpoint.model)?;
    if model.vocab_len() != vocab.len() {
        return Err(Error::Classifier(format!(
            "checkpoint weights cover {} tokens, its vocabulary has {}",
            model.vocab_len(),
            vocab.len()
        )));
    }
    Ok(model)
}

pub fn run_puzzles(args: PuzzlesArgs, level: LogLevel) -> std::result::Result<(), String> {
    let sampler = SamplerConfig {
        band: SpecificityBand::new(args.min_specificity, args.max_specificity),
        ..Default::default()
    };
    let mut generator = super::open_generator(&args.lexicon, &args.root, sampler, args.seed)?;

    let vocab = generator.vocabulary();
    let model = args
        .model
        .as_deref()
        .map(|path| load_predictor(path, &vocab))
        .transpose()
        .map_err(|e| format!("Model error: {e}"))?;

    let puzzles = generator
        .batch_generate(args.count)
        .map_err(|e| format!("Generation error: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "{} puzzles under {} ({} concepts in closure)",
            puzzles.len(),
            args.root,
            generator.members().len()
        ),
    );

    let mut correct = 0usize;
    for (i, puzzle) in puzzles.iter().enumerate() {
        let presentation = puzzle.present(generator.rng_mut());
        println!("{}", format_puzzle(i, puzzle, &presentation));
        if let Some(model) = &model {
            let pick = predict_presentation(model, &presentation, &vocab)
                .map_err(|e| format!("Prediction error: {e}"))?;
            if presentation.is_correct(pick) {
                correct += 1;
            }
            println!(
                "     model picks {} ({})",
                presentation.slots()[pick].display_name(),
                if presentation.is_correct(pick) { "right" } else { "wrong" }
            );
        }
    }

    if model.is_some() && !puzzles.is_empty() {
        log(
            level,
            LogLevel::Normal,
            &format!("Model accuracy: {correct}/{}", puzzles.len()),
        );
    }
    Ok(())
}
