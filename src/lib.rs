//! Odd-one-out puzzles over a lexical concept hierarchy.
//!
//! This crate provides:
//! - `lexicon` - the concept hierarchy, hyponym closures, specificity scores
//!   and structural metrics
//! - `puzzle` - puzzle sampling under a root, vocabularies, one-hot encoding
//!   and an interactive game
//! - `model` - the classifier trait and a tied-embedding baseline
//! - `train` - the self-advancing curriculum controller, callbacks,
//!   outcome log and best-model checkpoint
//! - `config` - YAML curriculum files and CLI arguments
//!
//! # Example
//!
//! ```
//! use oddword::lexicon::{ConceptGraph, Lexicon};
//! use oddword::puzzle::{PuzzleGenerator, SamplerConfig};
//!
//! let graph = ConceptGraph::builder()
//!     .concept("canine.n.02", ["canine"], Vec::<String>::new())
//!     .concept("dog.n.01", ["dog"], ["canine.n.02"])
//!     .concept("wolf.n.01", ["wolf"], ["canine.n.02"])
//!     .concept("poodle.n.01", ["poodle"], ["dog.n.01"])
//!     .concept("beagle.n.01", ["beagle"], ["dog.n.01"])
//!     .concept("corgi.n.01", ["corgi"], ["dog.n.01"])
//!     .concept("pug.n.01", ["pug"], ["dog.n.01"])
//!     .build()?;
//!
//! let mut generator =
//!     PuzzleGenerator::seeded(Lexicon::new(graph), "canine.n.02", SamplerConfig::default(), 1)?;
//! let puzzle = generator.sample_puzzle()?;
//! assert_eq!(puzzle.odd().name(), "wolf.n.01");
//! assert_eq!(puzzle.ancestor().name(), "dog.n.01");
//! # Ok::<(), oddword::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod puzzle;
pub mod train;

pub use error::{Error, Result};
