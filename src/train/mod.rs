//! Curriculum training loop
//!
//! This module provides:
//! - `CurriculumController` - per-target training, evaluation and promotion
//! - `CurriculumConfig` - epoch budget, cadences and thresholds
//! - Callbacks (progress printing, CSV outcome log)
//! - `BestModelCheckpoint` - single best-model file
//! - Mini-batching over encoded puzzles
//!
//! # Example
//!
//! ```no_run
//! use oddword::lexicon::{load_lexicon, Lexicon};
//! use oddword::model::TiedEmbeddingClassifier;
//! use oddword::puzzle::{PuzzleGenerator, SamplerConfig};
//! use oddword::train::{CurriculumConfig, CurriculumController, CurriculumTarget};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let lexicon = Lexicon::new(load_lexicon("data/sample_lexicon.yaml")?);
//! let generator = PuzzleGenerator::seeded(lexicon, "dog.n.01", SamplerConfig::default(), 42)?;
//! let mut controller = CurriculumController::new(generator, CurriculumConfig::default());
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let report = controller.run(&[CurriculumTarget::new("dog.n.01")], |vocab| {
//!     Ok(TiedEmbeddingClassifier::new(vocab, 32, 0.2, &mut rng))
//! })?;
//! println!("{} concepts mastered", report.successes().count());
//! # Ok::<(), oddword::Error>(())
//! ```

mod batch;
pub mod callback;
mod checkpoint;
mod config;
mod curriculum;

pub use batch::{shuffled_batches, train_epoch, Batch};
pub use callback::{
    read_outcomes, CallbackAction, CallbackManager, CsvOutcomeLog, CurriculumCallback,
    CurriculumContext, ProgressCallback,
};
pub use checkpoint::{BestModelCheckpoint, Checkpoint};
pub use config::CurriculumConfig;
pub use curriculum::{
    resolve_target, BestModel, CurriculumController, CurriculumOutcome, CurriculumReport, CurriculumState,
    CurriculumTarget, ResolvedTarget, BEST_ACCURACY_SENTINEL,
};
