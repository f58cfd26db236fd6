//! Classifier trait used by the curriculum

use ndarray::{ArrayView1, ArrayView2};
use serde::Serialize;

use crate::error::Result;
use crate::puzzle::{encode_presentation, EncodedPuzzles, Presentation, Vocabulary};

/// Trait for odd-one-out classifiers
///
/// Inputs are rows produced by [`crate::puzzle::encode_puzzles`]; outputs are
/// the slot index (0..5) of the odd concept.
pub trait PuzzleClassifier {
    /// Serializable weights written to the best-model checkpoint
    type Snapshot: Serialize + Clone;

    /// One optimization step on a mini-batch, returning the mean loss
    fn train_step(&mut self, inputs: ArrayView2<'_, f32>, labels: &[usize]) -> Result<f32>;

    /// Predicted odd slot for one encoded row
    fn predict(&self, row: ArrayView1<'_, f32>) -> Result<usize>;

    /// Fraction of rows predicted correctly (0.0 for an empty set)
    fn evaluate(&self, data: &EncodedPuzzles) -> Result<f32> {
        if data.is_empty() {
            return Ok(0.0);
        }
        let mut correct = 0usize;
        for (row, &label) in data.inputs().outer_iter().zip(data.labels()) {
            if self.predict(row)? == label {
                correct += 1;
            }
        }
        Ok(correct as f32 / data.len() as f32)
    }

    /// Copy of the current weights
    fn snapshot(&self) -> Self::Snapshot;

    /// Name for logging
    fn name(&self) -> &'static str {
        "PuzzleClassifier"
    }
}

/// Slot `model` picks as odd in `presentation`
pub fn predict_presentation<C: PuzzleClassifier + ?Sized>(
    model: &C,
    presentation: &Presentation,
    vocab: &Vocabulary,
) -> Result<usize> {
    let row = encode_presentation(presentation, vocab);
    model.predict(row.view())
}
