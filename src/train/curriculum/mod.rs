//! Curriculum learning over the concept hierarchy
//!
//! A classifier first learns puzzles drawn from a narrow concept. Each time it
//! clears the success threshold on held-out puzzles, the active concept moves
//! one step up the canonical hypernym chain, until the terminal root is
//! mastered or the epoch budget runs out.

mod controller;
mod record;
mod state;
mod target;


pub use controller::CurriculumController;
pub use record::{BestModel, CurriculumOutcome, CurriculumReport, BEST_ACCURACY_SENTINEL};
pub use state::CurriculumState;
pub use target::{resolve_target, CurriculumTarget, ResolvedTarget};
