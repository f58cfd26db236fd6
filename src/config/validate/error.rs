//! Validation error types
//!
//! Defines all validation error variants for curriculum specifications.

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Lexicon file does not exist: {0}")]
    LexiconNotFound(String),

    #[error("No curriculum targets given")]
    NoTargets,

    #[error("Target has an empty concept name")]
    EmptyTarget,

    #[error("Invalid epochs: {0} (must be > 0)")]
    InvalidEpochs(usize),

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid {name} puzzle count: {value} (must be > 0)")]
    InvalidPuzzleCount { name: &'static str, value: usize },

    #[error("Invalid {name} interval: {value} (must be > 0)")]
    InvalidInterval { name: &'static str, value: usize },

    #[error("Invalid success threshold: {0} (must be in [0.0, 1.0))")]
    InvalidSuccessThreshold(f32),

    #[error("Invalid terminal specificity: {0} (must be > 0)")]
    InvalidTerminalSpecificity(usize),

    #[error("Invalid specificity band: {min}..={max} (min must be <= max)")]
    InvalidBand { min: usize, max: usize },

    #[error("Invalid {name} retry budget: {value} (must be > 0)")]
    InvalidRetryBudget { name: &'static str, value: usize },

    #[error("Invalid embedding dimension: {0} (must be > 0)")]
    InvalidEmbeddingDim(usize),

    #[error("Invalid learning rate: {0} (must be > 0.0 and <= 1.0)")]
    InvalidLearningRate(f32),

    #[error("Output {0} file name cannot be empty")]
    EmptyOutputName(&'static str),
}
