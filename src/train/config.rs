//! Curriculum training configuration

use serde::{Deserialize, Serialize};

/// Training loop parameters, shared by every curriculum target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumConfig {
    /// Epoch budget per target
    #[serde(default = "default_epochs")]
    pub epochs: usize,

    /// Mini-batch size
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Puzzles drawn for each training set (before deduplication)
    #[serde(default = "default_train_puzzles")]
    pub train_puzzles: usize,

    /// Puzzles drawn for each held-out set (before deduplication)
    #[serde(default = "default_test_puzzles")]
    pub test_puzzles: usize,

    /// Regenerate data when `epoch % regenerate_every == 0`
    #[serde(default = "default_interval")]
    pub regenerate_every: usize,

    /// Evaluate when `(epoch + 1) % evaluate_every == 0`
    #[serde(default = "default_interval")]
    pub evaluate_every: usize,

    /// Promote once best accuracy is strictly above this
    #[serde(default = "default_success_threshold")]
    pub success_threshold: f32,

    /// Automatic terminal roots score below this
    #[serde(default = "default_terminal_specificity")]
    pub terminal_specificity: usize,

    /// Replicate the classifier across devices (accepted, runs single-device)
    #[serde(default, deserialize_with = "crate::config::deserialize_bool_lenient")]
    pub multi_device: bool,

    /// Random seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_epochs() -> usize {
    1000
}

fn default_batch_size() -> usize {
    32
}

fn default_train_puzzles() -> usize {
    2000
}

fn default_test_puzzles() -> usize {
    100
}

fn default_interval() -> usize {
    100
}

fn default_success_threshold() -> f32 {
    0.8
}

fn default_terminal_specificity() -> usize {
    700
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            epochs: default_epochs(),
            batch_size: default_batch_size(),
            train_puzzles: default_train_puzzles(),
            test_puzzles: default_test_puzzles(),
            regenerate_every: default_interval(),
            evaluate_every: default_interval(),
            success_threshold: default_success_threshold(),
            terminal_specificity: default_terminal_specificity(),
            multi_device: false,
            seed: None,
        }
    }
}

impl CurriculumConfig {
    /// Whether data is regenerated before `epoch`
    pub fn regenerates_at(&self, epoch: usize) -> bool {
        epoch.is_multiple_of(self.regenerate_every.max(1))
    }

    /// Whether held-out accuracy is computed after `epoch`
    pub fn evaluates_at(&self, epoch: usize) -> bool {
        (epoch + 1).is_multiple_of(self.evaluate_every.max(1))
    }
}
