//! Core traits and types for the callback system
//!
//! This module provides the foundational types for curriculum callbacks:
//! - `CurriculumContext` - State passed to callbacks
//! - `CallbackAction` - Actions a callback can request
//! - `CurriculumCallback` - The trait all callbacks implement

use crate::error::Result;
use crate::train::curriculum::CurriculumOutcome;

/// Context passed to callbacks with current curriculum state
#[derive(Clone, Debug, Default)]
pub struct CurriculumContext {
    /// Index of the curriculum target being trained
    pub target_index: usize,
    /// Concept the target starts from
    pub start: String,
    /// Broadest concept the target may be promoted to
    pub terminal: String,
    /// Concept puzzles are currently drawn from
    pub concept: String,
    /// Current epoch (0-indexed, counted per target)
    pub epoch: usize,
    /// Epoch budget per target
    pub max_epochs: usize,
    /// Epochs spent on the active concept
    pub epochs_on_concept: usize,
    /// Mean training loss of the last epoch
    pub loss: f32,
    /// Held-out accuracy, when this epoch evaluated
    pub accuracy: Option<f32>,
    /// Best held-out accuracy for the active concept (-1.0 before any evaluation)
    pub best_accuracy: f32,
    /// Distinct training puzzles in the current set
    pub train_puzzles: usize,
    /// Distinct held-out puzzles in the current set
    pub test_puzzles: usize,
}

/// Action to take after a callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    /// Continue training normally
    Continue,
    /// Abandon the current target with a failure record
    SkipTarget,
    /// Record a failure for the current target and stop the run
    Stop,
}

impl CallbackAction {
    /// The stronger of two requests (`Stop` over `SkipTarget` over `Continue`)
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Stop, _) | (_, Self::Stop) => Self::Stop,
            (Self::SkipTarget, _) | (_, Self::SkipTarget) => Self::SkipTarget,
            _ => Self::Continue,
        }
    }
}

/// Trait for curriculum callbacks
///
/// Implement this trait to hook into curriculum events. All methods have
/// default no-op implementations, so you only need to implement the
/// events you care about.
pub trait CurriculumCallback: Send {
    /// Called when a target starts, after its terminal root is resolved
    fn on_target_begin(&mut self, _ctx: &CurriculumContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Called after training and held-out sets are regenerated
    fn on_regenerate(&mut self, _ctx: &CurriculumContext) {}

    /// Called after each held-out evaluation
    fn on_evaluation(&mut self, _ctx: &CurriculumContext, _improved: bool) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Called when the active concept is promoted to its canonical parent
    fn on_promotion(&mut self, _ctx: &CurriculumContext, _from: &str, _to: &str) {}

    /// Called after each epoch
    fn on_epoch_end(&mut self, _ctx: &CurriculumContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Called for every success or failure record
    fn on_outcome(&mut self, _outcome: &CurriculumOutcome) -> Result<()> {
        Ok(())
    }

    /// Called when a target is finished, however it ended
    fn on_target_end(&mut self, _ctx: &CurriculumContext) {}

    /// Get callback name for logging
    fn name(&self) -> &'static str {
        "CurriculumCallback"
    }
}
