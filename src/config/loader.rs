//! Main entry points for YAML-based curriculum training

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::schema::CurriculumSpec;
use crate::config::validate::validate_config;
use crate::error::{Error, Result};
use crate::lexicon::{load_lexicon, Lexicon};
use crate::model::{TiedEmbeddingClassifier, TiedEmbeddingSnapshot};
use crate::puzzle::PuzzleGenerator;
use crate::train::{BestModelCheckpoint, CsvOutcomeLog, CurriculumController, CurriculumReport};

const MODEL_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG when a seed is given, OS-seeded otherwise
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Load and validate a curriculum specification
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<CurriculumSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    let spec: CurriculumSpec = serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?;

    validate_config(&spec).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;

    Ok(spec)
}

/// Build a controller for `spec`: lexicon, generator, checkpoint and outcome log
pub fn build_controller(spec: &CurriculumSpec) -> Result<CurriculumController> {
    let first = spec
        .targets
        .first()
        .ok_or_else(|| Error::ConfigError("No curriculum targets given".to_string()))?;

    let graph = load_lexicon(&spec.lexicon)?;
    tracing::info!(
        lexicon = %spec.lexicon.display(),
        concepts = graph.len(),
        targets = spec.targets.len(),
        "curriculum configured"
    );

    let generator = PuzzleGenerator::new(
        Lexicon::new(graph),
        &first.start,
        spec.sampler,
        seeded_rng(spec.training.seed),
    )?;

    let mut controller = CurriculumController::new(generator, spec.training.clone())
        .with_checkpoint(BestModelCheckpoint::new(spec.output.checkpoint_path()));
    controller.add_callback(CsvOutcomeLog::new(spec.output.outcome_log_path()));
    Ok(controller)
}

/// Run every target of `spec` with the tied-embedding baseline
pub fn run_curriculum(
    spec: &CurriculumSpec,
    controller: &mut CurriculumController,
) -> Result<CurriculumReport<TiedEmbeddingSnapshot>> {
    let mut rng = seeded_rng(spec.training.seed.map(|s| s ^ MODEL_SEED_SALT));
    let model = &spec.model;
    controller.run(&spec.targets, |vocab_len| {
        Ok(TiedEmbeddingClassifier::new(
            vocab_len,
            model.embedding_dim,
            model.learning_rate,
            &mut rng,
        ))
    })
}

/// Train from a YAML configuration file
///
/// # Example
///
/// ```no_run
/// use oddword::config::train_from_yaml;
///
/// let report = train_from_yaml("configs/sample.yaml")?;
/// println!("{} outcomes", report.outcomes.len());
/// # Ok::<(), oddword::Error>(())
/// ```
pub fn train_from_yaml<P: AsRef<Path>>(
    config_path: P,
) -> Result<CurriculumReport<TiedEmbeddingSnapshot>> {
    let spec = load_config(config_path)?;
    let mut controller = build_controller(&spec)?;
    run_curriculum(&spec, &mut controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "lexicon: lexicon.yaml\ntargets: [dog.n.01]\ntraining:\n  epochs: 5").unwrap();
        let spec = load_config(file.path()).unwrap();
        assert_eq!(spec.training.epochs, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("/nonexistent/config.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "lexicon: [unclosed").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigError(ref m) if m.contains("parse YAML")));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "lexicon: lexicon.yaml\ntargets: []").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;
        let a: u64 = seeded_rng(Some(3)).random();
        let b: u64 = seeded_rng(Some(3)).random();
        assert_eq!(a, b);
    }
}
