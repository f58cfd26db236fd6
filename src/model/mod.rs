//! Puzzle classifiers
//!
//! The curriculum only talks to [`PuzzleClassifier`]; the tied-embedding
//! model is the baseline implementation used by the CLI.

mod tied;
mod traits;

pub use tied::{TiedEmbeddingClassifier, TiedEmbeddingSnapshot};
pub use traits::{predict_presentation, PuzzleClassifier};
