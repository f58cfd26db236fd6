//! Curriculum controller
//!
//! Drives one classifier per target through progressively broader concepts:
//! train on puzzles from the active concept, evaluate on held-out puzzles,
//! promote to the canonical parent once accuracy clears the threshold, and
//! record an outcome whenever a concept is mastered or abandoned.

use std::sync::Arc;

use super::record::{CurriculumOutcome, CurriculumReport};
use super::state::CurriculumState;
use super::target::{resolve_target, CurriculumTarget, ResolvedTarget};
use crate::error::Result;
use crate::model::PuzzleClassifier;
use crate::puzzle::{encode_puzzles, EncodedPuzzles, PuzzleGenerator, Vocabulary};
use crate::train::batch::train_epoch;
use crate::train::callback::{
    CallbackAction, CallbackManager, CurriculumCallback, CurriculumContext,
};
use crate::train::checkpoint::BestModelCheckpoint;
use crate::train::config::CurriculumConfig;

struct Datasets {
    train: EncodedPuzzles,
    test: EncodedPuzzles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetFlow {
    Next,
    Stop,
}

/// Sequential curriculum over a list of targets
pub struct CurriculumController {
    generator: PuzzleGenerator,
    config: CurriculumConfig,
    callbacks: CallbackManager,
    checkpoint: Option<BestModelCheckpoint>,
}

impl CurriculumController {
    /// Controller drawing puzzles from `generator`
    pub fn new(generator: PuzzleGenerator, config: CurriculumConfig) -> Self {
        Self {
            generator,
            config,
            callbacks: CallbackManager::new(),
            checkpoint: None,
        }
    }

    /// Persist the best classifier to `checkpoint` on every improvement
    pub fn with_checkpoint(mut self, checkpoint: BestModelCheckpoint) -> Self {
        self.checkpoint = Some(checkpoint);
        self
    }

    /// Register a callback
    pub fn add_callback<C: CurriculumCallback + 'static>(&mut self, callback: C) {
        self.callbacks.add(callback);
    }

    /// Training parameters
    pub fn config(&self) -> &CurriculumConfig {
        &self.config
    }

    /// The puzzle generator
    pub fn generator(&self) -> &PuzzleGenerator {
        &self.generator
    }

    /// The checkpoint writer, if configured
    pub fn checkpoint(&self) -> Option<&BestModelCheckpoint> {
        self.checkpoint.as_ref()
    }

    /// Train every target in order.
    ///
    /// `factory` builds a fresh classifier for each target from the
    /// vocabulary size. Every target is resolved before training starts, so
    /// a missing concept or off-chain terminal aborts the run up front; a
    /// concept too small to host puzzles only abandons its target.
    pub fn run<C, F>(
        &mut self,
        targets: &[CurriculumTarget],
        mut factory: F,
    ) -> Result<CurriculumReport<C::Snapshot>>
    where
        C: PuzzleClassifier,
        F: FnMut(usize) -> Result<C>,
    {
        let threshold = self.config.terminal_specificity;
        let mut resolved = Vec::with_capacity(targets.len());
        for target in targets {
            resolved.push(resolve_target(self.generator.lexicon_mut(), target, threshold)?);
        }

        if self.config.multi_device {
            tracing::info!("multi-device replication requested; training on a single device");
        }

        let mut report = CurriculumReport::default();
        for (index, target) in resolved.into_iter().enumerate() {
            let flow = self.run_target(index, target, &mut factory, &mut report)?;
            if flow == TargetFlow::Stop {
                tracing::info!(target = index, "curriculum stopped by callback");
                report.stopped_early = true;
                break;
            }
        }
        Ok(report)
    }

    fn run_target<C, F>(
        &mut self,
        index: usize,
        resolved: ResolvedTarget,
        factory: &mut F,
        report: &mut CurriculumReport<C::Snapshot>,
    ) -> Result<TargetFlow>
    where
        C: PuzzleClassifier,
        F: FnMut(usize) -> Result<C>,
    {
        // One vocabulary per target, spanning the terminal closure, so the
        // classifier width survives promotions.
        self.generator.reset_root(resolved.terminal().name())?;
        let vocab = Arc::new(self.generator.vocabulary());
        let mut model = factory(vocab.len())?;

        let mut state = CurriculumState::new(resolved);
        self.generator.reset_root(state.active().name())?;

        let flow =
            self.train_target(index, &mut state, &mut model, &vocab, &mut report.outcomes)?;
        report.best_models.push(state.into_best_model());
        Ok(flow)
    }

    fn train_target<C: PuzzleClassifier>(
        &mut self,
        index: usize,
        state: &mut CurriculumState<C::Snapshot>,
        model: &mut C,
        vocab: &Arc<Vocabulary>,
        outcomes: &mut Vec<CurriculumOutcome>,
    ) -> Result<TargetFlow> {

        let mut ctx = CurriculumContext {
            target_index: index,
            start: state.target().start().name().to_string(),
            terminal: state.target().terminal().name().to_string(),
            concept: state.active().name().to_string(),
            max_epochs: self.config.epochs,
            best_accuracy: state.best_accuracy(),
            ..Default::default()
        };
        tracing::info!(
            target = index,
            start = %ctx.start,
            terminal = %ctx.terminal,
            vocab = vocab.len(),
            "curriculum target started"
        );

        match self.callbacks.on_target_begin(&ctx) {
            CallbackAction::Continue => {}
            action => return self.abandon(state, 0, &ctx, action, outcomes),
        }

        let mut data: Option<Datasets> = None;
        let mut epochs_done = 0;
        for epoch in 0..self.config.epochs {
            ctx.epoch = epoch;
            if data.is_none() || self.config.regenerates_at(epoch) {
                match self.regenerate(vocab) {
                    Ok(sets) => {
                        ctx.train_puzzles = sets.train.len();
                        ctx.test_puzzles = sets.test.len();
                        data = Some(sets);
                    }
                    Err(e) if e.is_recoverable() => {
                        tracing::warn!(
                            concept = %ctx.concept,
                            error = %e,
                            "cannot build puzzles, abandoning target"
                        );
                        self.record(outcomes, state.outcome(epochs_done, false))?;
                        self.callbacks.on_target_end(&ctx);
                        return Ok(TargetFlow::Next);
                    }
                    Err(e) => return Err(e),
                }
                self.callbacks.on_regenerate(&ctx);
            }

            let (loss, accuracy) = {
                let Some(sets) = data.as_ref() else {
                    continue;
                };
                let loss = train_epoch(
                    model,
                    &sets.train,
                    self.config.batch_size,
                    self.generator.rng_mut(),
                )?;
                let accuracy = if self.config.evaluates_at(epoch) {
                    Some(model.evaluate(&sets.test)?)
                } else {
                    None
                };
                (loss, accuracy)
            };
            epochs_done = epoch + 1;

            ctx.loss = loss;
            ctx.accuracy = accuracy;
            ctx.epochs_on_concept = state.epochs_used(epochs_done);

            let mut action = CallbackAction::Continue;
            if let Some(accuracy) = accuracy {
                let improved = state.observe(accuracy);
                ctx.best_accuracy = state.best_accuracy();
                tracing::info!(
                    concept = %ctx.concept,
                    epoch = epochs_done,
                    accuracy,
                    best = ctx.best_accuracy,
                    "held-out evaluation"
                );
                if improved {
                    let snapshot = model.snapshot();
                    if let Some(checkpoint) = self.checkpoint.as_mut() {
                        checkpoint.save(&ctx.concept, epochs_done, accuracy, vocab, &snapshot)?;
                    }
                    state.record_best(epochs_done, snapshot);
                }
                action = self.callbacks.on_evaluation(&ctx, improved);

                if state.mastered(self.config.success_threshold) {
                    self.record(outcomes, state.outcome(epochs_done, true))?;
                    let from = ctx.concept.clone();
                    let Some(next) = state.promote(epochs_done) else {
                        tracing::info!(terminal = %ctx.concept, "terminal root mastered");
                        self.callbacks.on_target_end(&ctx);
                        return Ok(match action {
                            CallbackAction::Stop => TargetFlow::Stop,
                            _ => TargetFlow::Next,
                        });
                    };
                    self.generator.reset_root(next.name())?;
                    data = None;
                    ctx.concept = next.name().to_string();
                    ctx.best_accuracy = state.best_accuracy();
                    ctx.epochs_on_concept = 0;
                    tracing::info!(from = %from, to = %ctx.concept, "concept promoted");
                    self.callbacks.on_promotion(&ctx, &from, next.name());
                }
            }

            action = action.merge(self.callbacks.on_epoch_end(&ctx));
            if action != CallbackAction::Continue {
                return self.abandon(state, epochs_done, &ctx, action, outcomes);
            }
        }

        tracing::info!(
            concept = %ctx.concept,
            epochs = epochs_done,
            best = state.best_accuracy(),
            "epoch budget exhausted"
        );
        self.record(outcomes, state.outcome(epochs_done, false))?;
        self.callbacks.on_target_end(&ctx);
        Ok(TargetFlow::Next)
    }

    fn regenerate(&mut self, vocab: &Arc<Vocabulary>) -> Result<Datasets> {
        let train_set = self
            .generator
            .generate_set(self.config.train_puzzles, Arc::clone(vocab))?;
        let test_set = self
            .generator
            .generate_set(self.config.test_puzzles, Arc::clone(vocab))?;
        tracing::debug!(
            concept = self.generator.root().name(),
            train = train_set.len(),
            test = test_set.len(),
            "puzzles regenerated"
        );
        let rng = self.generator.rng_mut();
        Ok(Datasets {
            train: encode_puzzles(&train_set, rng),
            test: encode_puzzles(&test_set, rng),
        })
    }

    fn abandon<S>(
        &mut self,
        state: &CurriculumState<S>,
        epochs_done: usize,
        ctx: &CurriculumContext,
        action: CallbackAction,
        outcomes: &mut Vec<CurriculumOutcome>,
    ) -> Result<TargetFlow> {
        tracing::info!(concept = %ctx.concept, ?action, "target abandoned by callback");
        self.record(outcomes, state.outcome(epochs_done, false))?;
        self.callbacks.on_target_end(ctx);
        Ok(match action {
            CallbackAction::Stop => TargetFlow::Stop,
            _ => TargetFlow::Next,
        })
    }

    fn record(
        &mut self,
        outcomes: &mut Vec<CurriculumOutcome>,
        outcome: CurriculumOutcome,
    ) -> Result<()> {
        self.callbacks.on_outcome(&outcome)?;
        outcomes.push(outcome);
        Ok(())
    }
}
