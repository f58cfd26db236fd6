//! Tests for CLI argument parsing

use super::*;
use crate::config::CurriculumSpec;
use std::path::PathBuf;

fn train_args() -> TrainArgs {
    TrainArgs {
        config: PathBuf::from("config.yaml"),
        output_dir: None,
        epochs: None,
        batch_size: None,
        lr: None,
        threshold: None,
        dry_run: false,
        seed: None,
    }
}

fn create_test_spec() -> CurriculumSpec {
    serde_yaml::from_str("lexicon: lexicon.yaml\ntargets: [dog.n.01]").unwrap()
}

#[test]
fn test_parse_train_command() {
    let cli = parse_args(["oddword", "train", "config.yaml"]).unwrap();
    match cli.command {
        Command::Train(args) => {
            assert_eq!(args.config, PathBuf::from("config.yaml"));
            assert!(!args.dry_run);
        }
        _ => panic!("Expected Train command"),
    }
}

#[test]
fn test_parse_train_with_overrides() {
    let cli = parse_args([
        "oddword",
        "train",
        "config.yaml",
        "--epochs",
        "10",
        "--batch-size",
        "16",
        "--lr",
        "0.05",
        "--threshold",
        "0.7",
        "--output-dir",
        "./output",
    ])
    .unwrap();

    match cli.command {
        Command::Train(args) => {
            assert_eq!(args.epochs, Some(10));
            assert_eq!(args.batch_size, Some(16));
            assert!((args.lr.unwrap() - 0.05).abs() < 1e-6);
            assert!((args.threshold.unwrap() - 0.7).abs() < 1e-6);
            assert_eq!(args.output_dir, Some(PathBuf::from("./output")));
        }
        _ => panic!("Expected Train command"),
    }
}

#[test]
fn test_parse_validate_detailed() {
    let cli = parse_args(["oddword", "validate", "config.yaml", "--detailed"]).unwrap();
    match cli.command {
        Command::Validate(args) => {
            assert_eq!(args.config, PathBuf::from("config.yaml"));
            assert!(args.detailed);
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn test_parse_chain_command() {
    let cli = parse_args(["oddword", "chain", "-x", "lex.yaml", "dog.n.01"]).unwrap();
    match cli.command {
        Command::Chain(args) => {
            assert_eq!(args.lexicon, PathBuf::from("lex.yaml"));
            assert_eq!(args.concept, "dog.n.01");
        }
        _ => panic!("Expected Chain command"),
    }
}

#[test]
fn test_parse_ancestor_command() {
    let cli = parse_args([
        "oddword", "ancestor", "--lexicon", "lex.yaml", "poodle", "wolf",
    ])
    .unwrap();
    match cli.command {
        Command::Ancestor(args) => {
            assert_eq!(args.words, vec!["poodle", "wolf"]);
            assert_eq!(args.fallback, "entity.n.01");
        }
        _ => panic!("Expected Ancestor command"),
    }
}

#[test]
fn test_ancestor_requires_words() {
    assert!(parse_args(["oddword", "ancestor", "-x", "lex.yaml"]).is_err());
}

#[test]
fn test_parse_puzzles_defaults() {
    let cli = parse_args(["oddword", "puzzles", "-x", "lex.yaml", "animal.n.01"]).unwrap();
    match cli.command {
        Command::Puzzles(args) => {
            assert_eq!(args.root, "animal.n.01");
            assert_eq!(args.count, 10);
            assert_eq!(args.min_specificity, 1);
            assert_eq!(args.max_specificity, 20);
            assert!(args.model.is_none());
            assert!(args.seed.is_none());
        }
        _ => panic!("Expected Puzzles command"),
    }
}

#[test]
fn test_parse_puzzles_with_model() {
    let cli = parse_args([
        "oddword",
        "puzzles",
        "-x",
        "lex.yaml",
        "animal.n.01",
        "-n",
        "3",
        "--model",
        "out/best_model.json",
        "--seed",
        "9",
    ])
    .unwrap();
    match cli.command {
        Command::Puzzles(args) => {
            assert_eq!(args.count, 3);
            assert_eq!(args.model, Some(PathBuf::from("out/best_model.json")));
            assert_eq!(args.seed, Some(9));
        }
        _ => panic!("Expected Puzzles command"),
    }
}

#[test]
fn test_parse_play_defaults() {
    let cli = parse_args(["oddword", "play", "-x", "lex.yaml", "animal.n.01"]).unwrap();
    match cli.command {
        Command::Play(args) => {
            assert_eq!(args.lives, 100);
            assert_eq!(args.count, 100);
        }
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_global_flags() {
    let cli = parse_args(["oddword", "-v", "train", "config.yaml"]).unwrap();
    assert!(cli.verbose);
    assert!(!cli.quiet);

    let cli = parse_args(["oddword", "train", "config.yaml", "--quiet"]).unwrap();
    assert!(!cli.verbose);
    assert!(cli.quiet);
}

#[test]
fn test_missing_config_file() {
    assert!(parse_args(["oddword", "train"]).is_err());
}

#[test]
fn test_unknown_command() {
    assert!(parse_args(["oddword", "unknown"]).is_err());
}

#[test]
fn test_apply_overrides_none_is_identity() {
    let mut spec = create_test_spec();
    let before = spec.clone();
    apply_overrides(&mut spec, &train_args());
    assert_eq!(spec, before);
}

#[test]
fn test_apply_overrides_all() {
    let mut spec = create_test_spec();
    let args = TrainArgs {
        output_dir: Some(PathBuf::from("./all_overrides")),
        epochs: Some(100),
        batch_size: Some(128),
        lr: Some(0.01),
        threshold: Some(0.6),
        seed: Some(42),
        dry_run: true,
        ..train_args()
    };
    apply_overrides(&mut spec, &args);
    assert_eq!(spec.output.dir, PathBuf::from("./all_overrides"));
    assert_eq!(spec.training.epochs, 100);
    assert_eq!(spec.training.batch_size, 128);
    assert!((spec.model.learning_rate - 0.01).abs() < 1e-8);
    assert!((spec.training.success_threshold - 0.6).abs() < 1e-8);
    assert_eq!(spec.training.seed, Some(42));
}
