//! Callback manager for dispatching events to multiple callbacks

use super::traits::{CallbackAction, CurriculumCallback, CurriculumContext};
use crate::error::Result;
use crate::train::curriculum::CurriculumOutcome;

/// Manages multiple callbacks and dispatches events
pub struct CallbackManager {
    callbacks: Vec<Box<dyn CurriculumCallback>>,
}

impl CallbackManager {
    /// Create new callback manager
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Add a callback
    pub fn add<C: CurriculumCallback + 'static>(&mut self, callback: C) {
        self.callbacks.push(Box::new(callback));
    }

    /// Check if no callbacks are registered
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Get number of callbacks
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Names of registered callbacks, in dispatch order
    pub fn names(&self) -> Vec<&'static str> {
        self.callbacks.iter().map(|cb| cb.name()).collect()
    }

    /// Fire target begin event
    pub fn on_target_begin(&mut self, ctx: &CurriculumContext) -> CallbackAction {
        combine(self.callbacks.iter_mut().map(|cb| cb.on_target_begin(ctx)))
    }

    /// Fire regeneration event
    pub fn on_regenerate(&mut self, ctx: &CurriculumContext) {
        for cb in &mut self.callbacks {
            cb.on_regenerate(ctx);
        }
    }

    /// Fire evaluation event
    pub fn on_evaluation(&mut self, ctx: &CurriculumContext, improved: bool) -> CallbackAction {
        combine(self.callbacks.iter_mut().map(|cb| cb.on_evaluation(ctx, improved)))
    }

    /// Fire promotion event
    pub fn on_promotion(&mut self, ctx: &CurriculumContext, from: &str, to: &str) {
        for cb in &mut self.callbacks {
            cb.on_promotion(ctx, from, to);
        }
    }

    /// Fire epoch end event
    pub fn on_epoch_end(&mut self, ctx: &CurriculumContext) -> CallbackAction {
        combine(self.callbacks.iter_mut().map(|cb| cb.on_epoch_end(ctx)))
    }

    /// Fire outcome event; the first failing callback aborts dispatch
    pub fn on_outcome(&mut self, outcome: &CurriculumOutcome) -> Result<()> {
        for cb in &mut self.callbacks {
            cb.on_outcome(outcome)?;
        }
        Ok(())
    }

    /// Fire target end event
    pub fn on_target_end(&mut self, ctx: &CurriculumContext) {
        for cb in &mut self.callbacks {
            cb.on_target_end(ctx);
        }
    }
}

/// Every callback sees the event; the strongest request wins.
fn combine(actions: impl Iterator<Item = CallbackAction>) -> CallbackAction {
    actions.fold(CallbackAction::Continue, CallbackAction::merge)
}

impl Default for CallbackManager {
    fn default() -> Self {
        Self::new()
    }
}
