//! CLI command tests

use super::ancestor::format_ancestor;
use super::chain::format_chain;
use super::puzzles::load_predictor;
use super::train::format_report;
use super::*;
use crate::cli::LogLevel;
use crate::config::*;
use crate::error::Error;
use crate::lexicon::fixtures::{animal_graph, write_lexicon};
use crate::model::{PuzzleClassifier, TiedEmbeddingClassifier};
use crate::puzzle::Vocabulary;
use crate::train::{read_outcomes, BestModelCheckpoint, CurriculumOutcome, CurriculumReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write the fixture lexicon and a small curriculum config
fn create_test_config(dir: &TempDir) -> PathBuf {
    let lexicon_path = write_lexicon(&animal_graph(), dir.path());
    let output_path = dir.path().join("output");
    let config_path = dir.path().join("curriculum.yaml");

    let config = format!(
        r#"
lexicon: {}
targets:
  - start: canine.n.02
    terminal: carnivore.n.01
training:
  epochs: 10
  batch_size: 8
  train_puzzles: 20
  test_puzzles: 10
  regenerate_every: 5
  evaluate_every: 5
  success_threshold: 0.5
  seed: 7
model:
  embedding_dim: 8
output:
  dir: {}
"#,
        lexicon_path.display(),
        output_path.display()
    );
    std::fs::write(&config_path, config).unwrap();
    config_path
}

fn train_args(config: PathBuf) -> TrainArgs {
    TrainArgs {
        config,
        output_dir: None,
        epochs: None,
        batch_size: None,
        lr: None,
        threshold: None,
        dry_run: false,
        seed: None,
    }
}

fn puzzles_args(lexicon: &Path) -> PuzzlesArgs {
    PuzzlesArgs {
        lexicon: lexicon.to_path_buf(),
        root: "canine.n.02".to_string(),
        count: 3,
        seed: Some(5),
        min_specificity: 1,
        max_specificity: 20,
        model: None,
    }
}

#[test]
fn test_validate_command_basic() {
    let dir = TempDir::new().unwrap();
    let args = ValidateArgs {
        config: create_test_config(&dir),
        detailed: true,
    };
    assert!(validate::run_validate(args, LogLevel::Quiet).is_ok());
}

#[test]
fn test_validate_missing_config() {
    let args = ValidateArgs {
        config: PathBuf::from("/nonexistent/curriculum.yaml"),
        detailed: false,
    };
    let err = validate::run_validate(args, LogLevel::Quiet).unwrap_err();
    assert!(err.starts_with("Config error"));
}

#[test]
fn test_train_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let args = TrainArgs {
        dry_run: true,
        ..train_args(create_test_config(&dir))
    };
    assert!(train::run_train(args, LogLevel::Verbose).is_ok());
    assert!(!dir.path().join("output").exists());
}

#[test]
fn test_train_rejects_bad_override() {
    let dir = TempDir::new().unwrap();
    let args = TrainArgs {
        threshold: Some(1.5),
        ..train_args(create_test_config(&dir))
    };
    let err = train::run_train(args, LogLevel::Quiet).unwrap_err();
    assert!(err.starts_with("Invalid override"));
}

#[test]
fn test_train_writes_outcomes_and_checkpoint() {
    let dir = TempDir::new().unwrap();
    let override_dir = dir.path().join("run");
    let args = TrainArgs {
        output_dir: Some(override_dir.clone()),
        ..train_args(create_test_config(&dir))
    };
    train::run_train(args, LogLevel::Quiet).unwrap();

    let outcomes = read_outcomes(override_dir.join("outcomes.csv")).unwrap();
    assert!(!outcomes.is_empty());
    assert_eq!(outcomes[0].concept, "canine.n.02");
    assert!(override_dir.join("best_model.json").exists());
}

#[test]
fn test_format_report() {
    let report: CurriculumReport = CurriculumReport {
        outcomes: vec![
            CurriculumOutcome::success("canine.n.02", 5, 0.9),
            CurriculumOutcome::failure("carnivore.n.01", 20, 0.4),
        ],
        best_models: vec![None],
        stopped_early: true,
    };
    assert_eq!(
        format_report(&report),
        "Curriculum complete: 1 mastered, 1 abandoned (stopped early)"
    );
}

#[test]
fn test_format_chain() {
    let mut lexicon = crate::lexicon::Lexicon::new(animal_graph());
    let lines = format_chain(&mut lexicon, "poodle.n.01").unwrap();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("poodle.n.01"));
    assert!(lines[2].starts_with("canine.n.02"));
    assert!(lines[2].contains("specificity     12"));
    assert!(lines[5].starts_with("entity.n.01"));
}

#[test]
fn test_chain_unknown_concept() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(&animal_graph(), dir.path());
    let args = ChainArgs {
        lexicon,
        concept: "unicorn.n.01".to_string(),
    };
    assert!(chain::run_chain(args, LogLevel::Quiet).is_err());
}

#[test]
fn test_format_ancestor() {
    let mut lexicon = crate::lexicon::Lexicon::new(animal_graph());
    let words = vec!["poodle".to_string(), "wolf".to_string()];
    assert_eq!(
        format_ancestor(&mut lexicon, &words, "entity.n.01").unwrap(),
        "canine.n.02 (specificity 12)"
    );
}

#[test]
fn test_ancestor_falls_back() {
    let mut lexicon = crate::lexicon::Lexicon::new(animal_graph());
    let words = vec!["poodle".to_string(), "spaceship".to_string()];
    let line = format_ancestor(&mut lexicon, &words, "entity.n.01").unwrap();
    assert!(line.starts_with("entity.n.01"));
}

#[test]
fn test_run_puzzles_without_model() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(&animal_graph(), dir.path());
    assert!(puzzles::run_puzzles(puzzles_args(&lexicon), LogLevel::Quiet).is_ok());
}

#[test]
fn test_run_puzzles_insufficient_root() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(&animal_graph(), dir.path());
    let args = PuzzlesArgs {
        root: "dog.n.01".to_string(),
        ..puzzles_args(&lexicon)
    };
    let err = puzzles::run_puzzles(args, LogLevel::Quiet).unwrap_err();
    assert!(err.starts_with("Generation error"));
}

#[test]
fn test_run_puzzles_with_checkpoint() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(&animal_graph(), dir.path());
    let generator = open_generator(&lexicon, "canine.n.02", Default::default(), Some(1)).unwrap();
    let vocab = generator.vocabulary();

    let mut rng = StdRng::seed_from_u64(3);
    let model = TiedEmbeddingClassifier::new(vocab.len(), 4, 0.1, &mut rng);
    let mut checkpoint = BestModelCheckpoint::new(dir.path().join("best_model.json"));
    checkpoint
        .save("canine.n.02", 5, 0.6, &vocab, &model.snapshot())
        .unwrap();

    assert!(load_predictor(checkpoint.path(), &vocab).is_ok());
    let args = PuzzlesArgs {
        model: Some(checkpoint.path().to_path_buf()),
        ..puzzles_args(&lexicon)
    };
    assert!(puzzles::run_puzzles(args, LogLevel::Quiet).is_ok());
}

#[test]
fn test_load_predictor_vocabulary_mismatch() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(&animal_graph(), dir.path());
    let generator = open_generator(&lexicon, "canine.n.02", Default::default(), Some(1)).unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let model = TiedEmbeddingClassifier::new(3, 4, 0.1, &mut rng);
    let small = Vocabulary::from_tokens(["bus", "car", "truck"]);
    let mut checkpoint = BestModelCheckpoint::new(dir.path().join("small.json"));
    checkpoint.save("tiny", 1, 0.2, &small, &model.snapshot()).unwrap();

    let err = load_predictor(checkpoint.path(), &generator.vocabulary()).unwrap_err();
    assert!(err.to_string().contains("vocabulary of 3 tokens"));
}

#[test]
fn test_load_predictor_rejects_same_size_vocabulary() {
    let dir = TempDir::new().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let model = TiedEmbeddingClassifier::new(3, 4, 0.1, &mut rng);
    let trained_on = Vocabulary::from_tokens(["dog", "poodle", "wolf"]);
    let mut checkpoint = BestModelCheckpoint::new(dir.path().join("canine.json"));
    checkpoint.save("canine.n.02", 1, 0.4, &trained_on, &model.snapshot()).unwrap();

    let vehicles = Vocabulary::from_tokens(["car", "truck", "bus"]);
    let err = load_predictor(checkpoint.path(), &vehicles).unwrap_err();
    assert!(matches!(err, Error::Classifier(_)));
    assert!(err.to_string().contains("different vocabulary"));

    assert!(load_predictor(checkpoint.path(), &trained_on).is_ok());
}
