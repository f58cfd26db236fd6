//! Progress callback for printing curriculum progress

use super::traits::{CallbackAction, CurriculumCallback, CurriculumContext};
use crate::error::Result;
use crate::train::curriculum::CurriculumOutcome;

/// Progress callback for printing curriculum progress
#[derive(Clone, Debug)]
pub struct ProgressCallback {
    /// Print the training loss every N epochs (evaluations always print)
    log_interval: usize,
}

impl ProgressCallback {
    /// Create progress callback
    pub fn new(log_interval: usize) -> Self {
        Self {
            log_interval: log_interval.max(1),
        }
    }

    /// Evaluation line
    pub fn format_evaluation(ctx: &CurriculumContext, improved: bool) -> String {
        let accuracy = ctx.accuracy.unwrap_or(0.0);
        let marker = if improved { " (new best)" } else { "" };
        format!(
            "  [{}] epoch {}/{}: accuracy {:.3}, best {:.3}{}",
            ctx.concept,
            ctx.epoch + 1,
            ctx.max_epochs,
            accuracy,
            ctx.best_accuracy,
            marker
        )
    }

    /// Outcome line
    pub fn format_outcome(outcome: &CurriculumOutcome) -> String {
        let status = if outcome.success { "mastered" } else { "gave up on" };
        format!(
            "{status} {} after {} epochs (best accuracy {:.3})",
            outcome.concept, outcome.epochs_used, outcome.best_accuracy
        )
    }
}

impl Default for ProgressCallback {
    fn default() -> Self {
        Self { log_interval: 10 }
    }
}

impl CurriculumCallback for ProgressCallback {
    fn on_target_begin(&mut self, ctx: &CurriculumContext) -> CallbackAction {
        println!(
            "Target {}: {} -> {} ({} epochs)",
            ctx.target_index + 1,
            ctx.start,
            ctx.terminal,
            ctx.max_epochs
        );
        CallbackAction::Continue
    }

    fn on_regenerate(&mut self, ctx: &CurriculumContext) {
        println!(
            "  [{}] {} training / {} held-out puzzles",
            ctx.concept, ctx.train_puzzles, ctx.test_puzzles
        );
    }

    fn on_evaluation(&mut self, ctx: &CurriculumContext, improved: bool) -> CallbackAction {
        println!("{}", Self::format_evaluation(ctx, improved));
        CallbackAction::Continue
    }

    fn on_promotion(&mut self, _ctx: &CurriculumContext, from: &str, to: &str) {
        println!("  promoted {from} -> {to}");
    }

    fn on_epoch_end(&mut self, ctx: &CurriculumContext) -> CallbackAction {
        if (ctx.epoch + 1).is_multiple_of(self.log_interval) {
            println!(
                "  [{}] epoch {}/{}: loss {:.4}",
                ctx.concept,
                ctx.epoch + 1,
                ctx.max_epochs,
                ctx.loss
            );
        }
        CallbackAction::Continue
    }

    fn on_outcome(&mut self, outcome: &CurriculumOutcome) -> Result<()> {
        println!("{}", Self::format_outcome(outcome));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ProgressCallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_callback() {
        let mut progress = ProgressCallback::new(5);
        let ctx = CurriculumContext {
            concept: "dog.n.01".into(),
            epoch: 4,
            max_epochs: 10,
            loss: 0.5,
            ..Default::default()
        };
        assert_eq!(progress.on_epoch_end(&ctx), CallbackAction::Continue);
        assert_eq!(progress.name(), "ProgressCallback");
    }

    #[test]
    fn test_format_evaluation() {
        let ctx = CurriculumContext {
            concept: "dog.n.01".into(),
            epoch: 99,
            max_epochs: 1000,
            accuracy: Some(0.75),
            best_accuracy: 0.75,
            ..Default::default()
        };
        let line = ProgressCallback::format_evaluation(&ctx, true);
        assert!(line.contains("epoch 100/1000"));
        assert!(line.contains("accuracy 0.750"));
        assert!(line.ends_with("(new best)"));
    }

    #[test]
    fn test_format_outcome() {
        let won = CurriculumOutcome::success("dog.n.01", 200, 0.85);
        assert_eq!(
            ProgressCallback::format_outcome(&won),
            "mastered dog.n.01 after 200 epochs (best accuracy 0.850)"
        );
        let lost = CurriculumOutcome::failure("canine.n.02", 800, 0.4);
        assert!(ProgressCallback::format_outcome(&lost).starts_with("gave up on"));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut progress = ProgressCallback::new(0);
        assert_eq!(
            progress.on_epoch_end(&CurriculumContext::default()),
            CallbackAction::Continue
        );
    }
}
