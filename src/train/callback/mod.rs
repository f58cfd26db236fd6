//! Curriculum callbacks
//!
//! Hooks into target start, regeneration, evaluation, promotion and outcome
//! events. The outcome log and the console progress printer are callbacks.

mod manager;
mod outcome_log;
mod progress;
mod traits;

pub use manager::CallbackManager;
pub use outcome_log::{read_outcomes, CsvOutcomeLog};
pub use progress::ProgressCallback;
pub use traits::{CallbackAction, CurriculumCallback, CurriculumContext};
