//! Odd-one-out puzzles
//!
//! - `PuzzleGenerator` - samples puzzles from the closure of an active root
//! - `Puzzle` / `PuzzleSet` - canonical puzzles and deduplicated sets
//! - `Vocabulary` - stable token → index mapping
//! - `encode_puzzles` - fixed-width multi-hot encoding for classifiers
//! - `play` - interactive game over generated puzzles

mod encode;
mod game;
mod generator;
mod types;
mod vocab;


pub use encode::{encode_presentation, encode_puzzle, encode_puzzles, EncodedPuzzles};
pub use game::{play, GameSummary, DEFAULT_LIVES};
pub use generator::{PuzzleGenerator, SamplerConfig, SpecificityBand};
pub use types::{Presentation, Puzzle, PuzzleSet, ODD_SLOT, PUZZLE_SIZE};
pub use vocab::{concept_tokens, Vocabulary};
