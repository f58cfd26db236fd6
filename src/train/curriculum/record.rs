//! Curriculum outcome records

use serde::{Deserialize, Serialize};

/// Best-accuracy value before any evaluation; below every reachable accuracy
pub const BEST_ACCURACY_SENTINEL: f32 = -1.0;

/// One row of the outcome log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumOutcome {
    /// Concept the record is about
    pub concept: String,
    /// Epochs spent on that concept
    pub epochs_used: usize,
    /// Best held-out accuracy reached on it
    pub best_accuracy: f32,
    /// Whether the concept was mastered
    pub success: bool,
}

impl CurriculumOutcome {
    /// Mastered concept
    pub fn success(concept: impl Into<String>, epochs_used: usize, best_accuracy: f32) -> Self {
        Self {
            concept: concept.into(),
            epochs_used,
            best_accuracy,
            success: true,
        }
    }

    /// Concept abandoned when the budget ran out or data could not be built
    pub fn failure(concept: impl Into<String>, epochs_used: usize, best_accuracy: f32) -> Self {
        Self {
            concept: concept.into(),
            epochs_used,
            best_accuracy,
            success: false,
        }
    }
}

/// Best classifier snapshot seen while training a target
#[derive(Debug, Clone, PartialEq)]
pub struct BestModel<S> {
    /// Active concept at the evaluation
    pub concept: String,
    /// Epoch of the evaluation (1-based)
    pub epoch: usize,
    /// Held-out accuracy it reached
    pub accuracy: f32,
    /// Classifier weights
    pub model: S,
}

/// All outcomes of a run, in emission order
#[derive(Debug, Clone, PartialEq)]
pub struct CurriculumReport<S = ()> {
    /// Success and failure records
    pub outcomes: Vec<CurriculumOutcome>,
    /// Latest best model of each attempted target, in target order;
    /// `None` when the target never reached an evaluation
    pub best_models: Vec<Option<BestModel<S>>>,
    /// Whether a callback stopped the run before every target was tried
    pub stopped_early: bool,
}

impl<S> Default for CurriculumReport<S> {
    fn default() -> Self {
        Self {
            outcomes: Vec::new(),
            best_models: Vec::new(),
            stopped_early: false,
        }
    }
}

impl<S> CurriculumReport<S> {
    /// Best model of the target at `index`
    pub fn best_model(&self, index: usize) -> Option<&BestModel<S>> {
        self.best_models.get(index).and_then(Option::as_ref)
    }

    /// Mastered concepts
    pub fn successes(&self) -> impl Iterator<Item = &CurriculumOutcome> {
        self.outcomes.iter().filter(|o| o.success)
    }

    /// Abandoned concepts
    pub fn failures(&self) -> impl Iterator<Item = &CurriculumOutcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }
}
