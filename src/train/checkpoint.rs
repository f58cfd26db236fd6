//! Best-model checkpoint file

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::puzzle::Vocabulary;

/// Contents of a checkpoint file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint<S> {
    /// Active concept when the snapshot was taken
    pub concept: String,
    /// Epoch of the evaluation that produced it (1-based)
    pub epoch: usize,
    /// Held-out accuracy at that evaluation
    pub accuracy: f32,
    /// Write time
    pub saved_at: DateTime<Utc>,
    /// Token order the classifier inputs were encoded with
    pub vocabulary: Vocabulary,
    /// Classifier weights
    pub model: S,
}

/// Single checkpoint file, overwritten on every new best
#[derive(Debug, Clone)]
pub struct BestModelCheckpoint {
    path: PathBuf,
    saves: usize,
}

impl BestModelCheckpoint {
    /// Checkpoint at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            saves: 0,
        }
    }

    /// Checkpoint file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of writes so far
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Overwrite the checkpoint with `model`
    pub fn save<S: Serialize>(
        &mut self,
        concept: &str,
        epoch: usize,
        accuracy: f32,
        vocabulary: &Vocabulary,
        model: &S,
    ) -> Result<()> {
        let checkpoint = Checkpoint {
            concept: concept.to_string(),
            epoch,
            accuracy,
            saved_at: Utc::now(),
            vocabulary: vocabulary.clone(),
            model,
        };
        let data = serde_json::to_string(&checkpoint)
            .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        // Readers never see a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;

        self.saves += 1;
        tracing::info!(
            path = %self.path.display(),
            concept,
            epoch,
            accuracy,
            "best model saved"
        );
        Ok(())
    }

    /// Read a checkpoint back
    pub fn load<S: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Checkpoint<S>> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let mut checkpoint: Checkpoint<S> = serde_json::from_str(&data).map_err(|e| {
            Error::Serialization(format!("Failed to parse checkpoint {}: {e}", path.display()))
        })?;
        checkpoint.vocabulary.reindex();
        Ok(checkpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_overwrites_and_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("best.json");
        let mut ckpt = BestModelCheckpoint::new(&path);
        let vocab = Vocabulary::from_tokens(["poodle", "wolf"]);

        ckpt.save("dog.n.01", 100, 0.6, &vocab, &vec![1.0f32, 2.0]).unwrap();
        ckpt.save("dog.n.01", 200, 0.9, &vocab, &vec![3.0f32]).unwrap();
        assert_eq!(ckpt.saves(), 2);

        let loaded: Checkpoint<Vec<f32>> = BestModelCheckpoint::load(&path).unwrap();
        assert_eq!(loaded.epoch, 200);
        assert_eq!(loaded.model, vec![3.0]);
        assert_eq!(loaded.vocabulary, vocab);
        assert_eq!(loaded.vocabulary.index_of("wolf"), Some(1));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best.json");
        std::fs::write(&path, "not json").unwrap();
        let err = BestModelCheckpoint::load::<Vec<f32>>(&path).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BestModelCheckpoint::load::<Vec<f32>>("/nonexistent/best.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
