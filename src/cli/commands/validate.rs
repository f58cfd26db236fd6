//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, CurriculumSpec, ValidateArgs};

/// Format the lexicon and targets as a string
pub fn format_target_info(spec: &CurriculumSpec) -> String {
    let mut lines = vec![format!("  Lexicon: {}", spec.lexicon.display())];
    for target in &spec.targets {
        match &target.terminal {
            Some(terminal) => lines.push(format!("  Target: {} -> {terminal}", target.start)),
            None => lines.push(format!("  Target: {}", target.start)),
        }
    }
    lines.join("\n")
}

/// Format the training loop parameters as a string
pub fn format_training_info(spec: &CurriculumSpec) -> String {
    let t = &spec.training;
    let mut lines = vec![
        format!("  Epochs per target: {}", t.epochs),
        format!("  Batch size: {}", t.batch_size),
        format!(
            "  Puzzles: {} training, {} held-out",
            t.train_puzzles, t.test_puzzles
        ),
        format!(
            "  Regenerate every {} epochs, evaluate every {}",
            t.regenerate_every, t.evaluate_every
        ),
        format!("  Success threshold: {}", t.success_threshold),
        format!("  Terminal specificity: {}", t.terminal_specificity),
    ];
    if let Some(seed) = t.seed {
        lines.push(format!("  Seed: {seed}"));
    }
    lines.join("\n")
}

/// Format sampler and model parameters as a string
pub fn format_model_info(spec: &CurriculumSpec) -> String {
    format!(
        "  Specificity band: {}..={}\n  Embedding dim: {}\n  Learning rate: {}",
        spec.sampler.band.min,
        spec.sampler.band.max,
        spec.model.embedding_dim,
        spec.model.learning_rate
    )
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &CurriculumSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_target_info(spec));
    println!();
    println!("{}", format_training_info(spec));
    println!();
    println!("{}", format_model_info(spec));
    println!();
    println!(
        "  Checkpoint: {}\n  Outcome log: {}",
        spec.output.checkpoint_path().display(),
        spec.output.outcome_log_path().display()
    );
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&spec);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_spec() -> CurriculumSpec {
        serde_yaml::from_str(
            "lexicon: /lex/sample.yaml\n\
             targets:\n  - dog.n.01\n  - start: canine.n.02\n    terminal: carnivore.n.01\n\
             training:\n  epochs: 40\n  seed: 11\n\
             model:\n  embedding_dim: 16\n",
        )
        .unwrap()
    }

    #[test]
    fn test_format_target_info() {
        let info = format_target_info(&make_test_spec());
        assert!(info.contains("/lex/sample.yaml"));
        assert!(info.contains("Target: dog.n.01\n"));
        assert!(info.contains("canine.n.02 -> carnivore.n.01"));
    }

    #[test]
    fn test_format_training_info() {
        let info = format_training_info(&make_test_spec());
        assert!(info.contains("Epochs per target: 40"));
        assert!(info.contains("Seed: 11"));
    }

    #[test]
    fn test_format_training_info_without_seed() {
        let mut spec = make_test_spec();
        spec.training.seed = None;
        assert!(!format_training_info(&spec).contains("Seed"));
    }

    #[test]
    fn test_format_model_info() {
        let info = format_model_info(&make_test_spec());
        assert!(info.contains("Embedding dim: 16"));
        assert!(info.contains("Learning rate: 0.2"));
    }
}
