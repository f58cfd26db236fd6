//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CurriculumSpec;
use crate::puzzle::DEFAULT_LIVES;

/// Oddword: odd-one-out puzzles over a lexical hierarchy
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "oddword")]
#[command(version)]
#[command(about = "Odd-one-out puzzle generation and curriculum training over a concept hierarchy")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a curriculum from YAML configuration
    Train(TrainArgs),

    /// Validate a configuration file without training
    Validate(ValidateArgs),

    /// Print the hypernym chain of a concept with specificity and flatness
    Chain(ChainArgs),

    /// Find the lowest common ancestor of some words
    Ancestor(AncestorArgs),

    /// Print sampled puzzles under a root
    Puzzles(PuzzlesArgs),

    /// Play the odd-one-out game in the terminal
    Play(PlayArgs),
}

/// Arguments for the train command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override number of epochs per target
    #[arg(short, long)]
    pub epochs: Option<usize>,

    /// Override batch size
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Override learning rate
    #[arg(short, long)]
    pub lr: Option<f32>,

    /// Override success threshold
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Dry run (validate config but don't train)
    #[arg(long)]
    pub dry_run: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed configuration summary
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the chain command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ChainArgs {
    /// Lexicon file (JSON or YAML)
    #[arg(short = 'x', long)]
    pub lexicon: PathBuf,

    /// Concept name, e.g. dog.n.01
    #[arg(value_name = "CONCEPT")]
    pub concept: String,
}

/// Arguments for the ancestor command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct AncestorArgs {
    /// Lexicon file (JSON or YAML)
    #[arg(short = 'x', long)]
    pub lexicon: PathBuf,

    /// Words to relate
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Concept reported when the words share no hypernym
    #[arg(long, default_value = "entity.n.01")]
    pub fallback: String,
}

/// Arguments for the puzzles command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PuzzlesArgs {
    /// Lexicon file (JSON or YAML)
    #[arg(short = 'x', long)]
    pub lexicon: PathBuf,

    /// Root concept puzzles are drawn under
    #[arg(value_name = "ROOT")]
    pub root: String,

    /// Number of puzzles
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lowest sibling specificity
    #[arg(long, default_value_t = 1)]
    pub min_specificity: usize,

    /// Highest sibling specificity
    #[arg(long, default_value_t = 20)]
    pub max_specificity: usize,

    /// Best-model checkpoint used to predict each puzzle
    #[arg(short, long)]
    pub model: Option<PathBuf>,
}

/// Arguments for the play command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PlayArgs {
    /// Lexicon file (JSON or YAML)
    #[arg(short = 'x', long)]
    pub lexicon: PathBuf,

    /// Root concept puzzles are drawn under
    #[arg(value_name = "ROOT")]
    pub root: String,

    /// Number of puzzles
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,

    /// Lives at the start of the game
    #[arg(long, default_value_t = DEFAULT_LIVES)]
    pub lives: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a CurriculumSpec
pub fn apply_overrides(spec: &mut CurriculumSpec, args: &TrainArgs) {
    if let Some(output_dir) = &args.output_dir {
        spec.output.dir = output_dir.clone();
    }
    if let Some(epochs) = args.epochs {
        spec.training.epochs = epochs;
    }
    if let Some(batch_size) = args.batch_size {
        spec.training.batch_size = batch_size;
    }
    if let Some(lr) = args.lr {
        spec.model.learning_rate = lr;
    }
    if let Some(threshold) = args.threshold {
        spec.training.success_threshold = threshold;
    }
    if let Some(seed) = args.seed {
        spec.training.seed = Some(seed);
    }
}
