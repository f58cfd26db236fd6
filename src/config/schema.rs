//! YAML schema definitions for declarative curriculum configuration

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use crate::puzzle::SamplerConfig;
use crate::train::{CurriculumConfig, CurriculumTarget};

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
pub(crate) fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

/// Complete curriculum specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumSpec {
    /// Lexicon file (JSON or YAML)
    pub lexicon: PathBuf,

    /// Targets trained in order
    #[serde(default)]
    pub targets: Vec<CurriculumTarget>,

    /// Training loop parameters
    #[serde(default)]
    pub training: CurriculumConfig,

    /// Puzzle sampling parameters
    #[serde(default)]
    pub sampler: SamplerConfig,

    /// Baseline classifier parameters
    #[serde(default)]
    pub model: ModelSpec,

    /// Output locations
    #[serde(default)]
    pub output: OutputSpec,
}

/// Tied-embedding classifier parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Embedding width
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,

    /// SGD learning rate
    #[serde(default = "default_lr")]
    pub learning_rate: f32,
}

fn default_embedding_dim() -> usize {
    32
}

fn default_lr() -> f32 {
    0.2
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            embedding_dim: default_embedding_dim(),
            learning_rate: default_lr(),
        }
    }
}

/// Where run artifacts go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Output directory
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Best-model checkpoint file name
    #[serde(default = "default_checkpoint")]
    pub checkpoint: String,

    /// Outcome log file name
    #[serde(default = "default_outcome_log")]
    pub outcome_log: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

fn default_checkpoint() -> String {
    "best_model.json".to_string()
}

fn default_outcome_log() -> String {
    "outcomes.csv".to_string()
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            checkpoint: default_checkpoint(),
            outcome_log: default_outcome_log(),
        }
    }
}

impl OutputSpec {
    /// Full checkpoint path
    pub fn checkpoint_path(&self) -> PathBuf {
        self.dir.join(&self.checkpoint)
    }

    /// Full outcome log path
    pub fn outcome_log_path(&self) -> PathBuf {
        self.dir.join(&self.outcome_log)
    }
}
