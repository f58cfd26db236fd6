//! Per-target curriculum state

use std::sync::Arc;

use super::record::{BestModel, CurriculumOutcome, BEST_ACCURACY_SENTINEL};
use super::target::ResolvedTarget;
use crate::lexicon::Concept;

/// Active concept, best accuracy and snapshot, and epoch bookkeeping for
/// one target.
///
/// Promotion only moves forward along the resolved path, so a concept is
/// never revisited. The best accuracy resets on promotion; the best model
/// is kept until a newer evaluation improves on the active concept.
#[derive(Debug, Clone)]
pub struct CurriculumState<S = ()> {
    target: ResolvedTarget,
    position: usize,
    best_accuracy: f32,
    best_model: Option<BestModel<S>>,
    concept_started_at: usize,
}

impl<S> CurriculumState<S> {
    /// Fresh state on the target's start concept
    pub fn new(target: ResolvedTarget) -> Self {
        Self {
            target,
            position: 0,
            best_accuracy: BEST_ACCURACY_SENTINEL,
            best_model: None,
            concept_started_at: 0,
        }
    }

    /// The resolved target
    pub fn target(&self) -> &ResolvedTarget {
        &self.target
    }

    /// Concept puzzles are drawn from
    pub fn active(&self) -> &Arc<Concept> {
        &self.target.path()[self.position]
    }

    /// Whether the active concept is the terminal root
    pub fn is_terminal(&self) -> bool {
        self.position + 1 == self.target.path().len()
    }

    /// Best held-out accuracy for the active concept
    pub fn best_accuracy(&self) -> f32 {
        self.best_accuracy
    }

    /// Record an evaluation; returns whether it beat the best so far
    pub fn observe(&mut self, accuracy: f32) -> bool {
        if accuracy > self.best_accuracy {
            self.best_accuracy = accuracy;
            true
        } else {
            false
        }
    }

    /// Keep `model` as the snapshot behind the current best accuracy
    pub fn record_best(&mut self, epoch: usize, model: S) {
        self.best_model = Some(BestModel {
            concept: self.active().name().to_string(),
            epoch,
            accuracy: self.best_accuracy,
            model,
        });
    }

    /// Snapshot of the latest improvement
    pub fn best_model(&self) -> Option<&BestModel<S>> {
        self.best_model.as_ref()
    }

    /// Consume the state, keeping its best model
    pub fn into_best_model(self) -> Option<BestModel<S>> {
        self.best_model
    }

    /// Whether the best accuracy is above `threshold`
    pub fn mastered(&self, threshold: f32) -> bool {
        self.best_accuracy > threshold
    }

    /// Epochs spent on the active concept once `epochs_done` epochs have run
    pub fn epochs_used(&self, epochs_done: usize) -> usize {
        epochs_done.saturating_sub(self.concept_started_at)
    }

    /// Record for the active concept
    pub fn outcome(&self, epochs_done: usize, success: bool) -> CurriculumOutcome {
        CurriculumOutcome {
            concept: self.active().name().to_string(),
            epochs_used: self.epochs_used(epochs_done),
            best_accuracy: self.best_accuracy,
            success,
        }
    }

    /// Advance to the canonical parent, resetting the best tracker.
    ///
    /// Returns the new active concept, or `None` on the terminal root.
    pub fn promote(&mut self, epochs_done: usize) -> Option<Arc<Concept>> {
        if self.is_terminal() {
            return None;
        }
        self.position += 1;
        self.best_accuracy = BEST_ACCURACY_SENTINEL;
        self.concept_started_at = epochs_done;
        Some(Arc::clone(self.active()))
    }
}
