//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! oddword train configs/sample.yaml
//! oddword train configs/sample.yaml --epochs 300 --seed 7
//! oddword validate configs/sample.yaml --detailed
//! oddword chain -x data/sample_lexicon.yaml dog.n.01
//! oddword ancestor -x data/sample_lexicon.yaml poodle wolf
//! oddword puzzles -x data/sample_lexicon.yaml canine.n.02 -n 5
//! oddword play -x data/sample_lexicon.yaml animal.n.01
//! ```

mod core;

#[cfg(test)]
mod tests;

pub use core::{
    apply_overrides, parse_args, AncestorArgs, ChainArgs, Cli, Command, PlayArgs, PuzzlesArgs,
    TrainArgs, ValidateArgs,
};
