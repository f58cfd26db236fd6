//! Declarative curriculum configuration
//!
//! A curriculum run is described by a YAML file:
//!
//! ```yaml
//! lexicon: data/sample_lexicon.yaml
//! targets:
//!   - dog.n.01
//!   - start: canine.n.02
//!     terminal: carnivore.n.01
//! training:
//!   epochs: 200
//!   success_threshold: 0.8
//! sampler:
//!   band: { min: 1, max: 20 }
//! model:
//!   embedding_dim: 32
//! output:
//!   dir: ./output
//! ```
//!
//! [`load_config`] parses and validates it; [`train_from_yaml`] runs it.

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, AncestorArgs, ChainArgs, Cli, Command, PlayArgs, PuzzlesArgs,
    TrainArgs, ValidateArgs,
};
pub use loader::{build_controller, load_config, run_curriculum, seeded_rng, train_from_yaml};
pub use schema::{CurriculumSpec, ModelSpec, OutputSpec};
pub use validate::{validate_config, ValidationError};

pub(crate) use schema::deserialize_bool_lenient;
