//! Append-only CSV log of curriculum outcomes

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use super::traits::CurriculumCallback;
use crate::error::Result;
use crate::train::curriculum::CurriculumOutcome;

/// Writes one row per outcome: `concept,epochs_used,best_accuracy,success`.
///
/// The header is written only when the file is new or empty, so repeated runs
/// keep appending to the same log.
#[derive(Clone, Debug)]
pub struct CsvOutcomeLog {
    path: PathBuf,
    rows_written: usize,
}

impl CsvOutcomeLog {
    /// Log to `path` (created on first write)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rows_written: 0,
        }
    }

    /// Log file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows appended by this instance
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Append one outcome
    pub fn append(&mut self, outcome: &CurriculumOutcome) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let needs_header = std::fs::metadata(&self.path).map_or(true, |m| m.len() == 0);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(outcome)?;
        writer.flush()?;
        self.rows_written += 1;
        Ok(())
    }
}

impl CurriculumCallback for CsvOutcomeLog {
    fn on_outcome(&mut self, outcome: &CurriculumOutcome) -> Result<()> {
        self.append(outcome)?;
        tracing::debug!(
            path = %self.path.display(),
            concept = %outcome.concept,
            success = outcome.success,
            "outcome logged"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "CsvOutcomeLog"
    }
}

/// Read every outcome from a log written by [`CsvOutcomeLog`]
pub fn read_outcomes(path: impl AsRef<Path>) -> Result<Vec<CurriculumOutcome>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut outcomes = Vec::new();
    for row in reader.deserialize() {
        outcomes.push(row?);
    }
    Ok(outcomes)
}
