//! Error types for oddword
//!
//! Lookup and sampling failures are kept distinct: a missing concept is a
//! data/config problem and fails the request outright, while an insufficient
//! closure is recoverable by the caller (wider band, other root, abandon).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for oddword operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a lexicon, sampling puzzles or
/// running a curriculum.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested concept is not present in the hierarchy.
    #[error("Concept not found: {0}\n  → Check the concept name against the lexicon file")]
    ConceptNotFound(String),

    /// A sampling constraint could not be met within its retry budget.
    #[error("Insufficient closure under '{root}': {reason}")]
    InsufficientClosure { root: String, reason: String },

    /// Lexicon file is structurally invalid (unknown parent, cycle, duplicate).
    #[error("Invalid lexicon: {0}")]
    Lexicon(String),

    /// Lexicon or config file has an unsupported extension.
    #[error("Unsupported file format: {path}\n  → Supported formats: .json, .yaml, .yml")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Classifier collaborator failure (shape mismatch, divergence).
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Outcome log write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for an [`Error::InsufficientClosure`].
    pub fn insufficient(root: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InsufficientClosure {
            root: root.into(),
            reason: reason.into(),
        }
    }

    /// Whether the caller can recover by retrying with different parameters.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InsufficientClosure { .. })
    }
}
