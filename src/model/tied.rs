//! Tied-embedding odd-one-out classifier
//!
//! Every slot is embedded with the same matrix `E` (vocab × dim): the slot
//! embedding `e_k` is the sum of the rows of its tokens. The logit of slot `k`
//! is its negated similarity to the other four slots,
//!
//! ```text
//! z_k = -e_k · (S - e_k),   S = Σ_j e_j
//! ```
//!
//! so the least similar slot wins. Training is softmax cross-entropy with
//! plain SGD on `E`.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::traits::PuzzleClassifier;
use crate::error::{Error, Result};
use crate::puzzle::PUZZLE_SIZE;

const INIT_SCALE: f32 = 0.1;

/// Serialized classifier weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiedEmbeddingSnapshot {
    /// Tokens per slot block
    pub vocab_len: usize,
    /// SGD step size
    pub learning_rate: f32,
    /// Embedding matrix (vocab × dim)
    pub embeddings: Array2<f32>,
}

/// Shared-embedding classifier over encoded puzzles
#[derive(Debug, Clone)]
pub struct TiedEmbeddingClassifier {
    embeddings: Array2<f32>,
    vocab_len: usize,
    learning_rate: f32,
}

impl TiedEmbeddingClassifier {
    /// Create a classifier with small random weights
    pub fn new<R: Rng + ?Sized>(vocab_len: usize, dim: usize, learning_rate: f32, rng: &mut R) -> Self {
        let embeddings =
            Array2::from_shape_fn((vocab_len, dim), |_| rng.random_range(-INIT_SCALE..INIT_SCALE));
        Self {
            embeddings,
            vocab_len,
            learning_rate,
        }
    }

    /// Rebuild a classifier from a checkpointed snapshot
    pub fn from_snapshot(snapshot: TiedEmbeddingSnapshot) -> Result<Self> {
        if snapshot.embeddings.nrows() != snapshot.vocab_len {
            return Err(Error::Classifier(format!(
                "snapshot has {} embedding rows for a vocabulary of {}",
                snapshot.embeddings.nrows(),
                snapshot.vocab_len
            )));
        }
        Ok(Self {
            embeddings: snapshot.embeddings,
            vocab_len: snapshot.vocab_len,
            learning_rate: snapshot.learning_rate,
        })
    }

    /// Tokens per slot block
    pub fn vocab_len(&self) -> usize {
        self.vocab_len
    }

    /// Embedding width
    pub fn dim(&self) -> usize {
        self.embeddings.ncols()
    }

    /// Expected input row width
    pub fn input_width(&self) -> usize {
        self.vocab_len * PUZZLE_SIZE
    }

    fn slot_blocks(&self, row: ArrayView1<'_, f32>) -> Result<Array2<f32>> {
        if row.len() != self.input_width() {
            return Err(Error::Classifier(format!(
                "input width {} does not match {} ({} tokens × {PUZZLE_SIZE} slots)",
                row.len(),
                self.input_width(),
                self.vocab_len
            )));
        }
        row.to_owned()
            .into_shape_with_order((PUZZLE_SIZE, self.vocab_len))
            .map_err(|e| Error::Classifier(e.to_string()))
    }

    /// Per-slot logits
    pub fn logits(&self, row: ArrayView1<'_, f32>) -> Result<Array1<f32>> {
        let slots = self.slot_blocks(row)?.dot(&self.embeddings);
        Ok(slot_logits(&slots))
    }
}

fn slot_logits(slots: &Array2<f32>) -> Array1<f32> {
    let total = slots.sum_axis(Axis(0));
    slots
        .outer_iter()
        .map(|e| e.dot(&e) - e.dot(&total))
        .collect()
}

fn softmax(logits: &Array1<f32>) -> Array1<f32> {
    let max = logits.fold(f32::NEG_INFINITY, |m, &z| m.max(z));
    let exp = logits.mapv(|z| (z - max).exp());
    let sum = exp.sum();
    exp / sum
}

impl PuzzleClassifier for TiedEmbeddingClassifier {
    type Snapshot = TiedEmbeddingSnapshot;

    fn train_step(&mut self, inputs: ArrayView2<'_, f32>, labels: &[usize]) -> Result<f32> {
        if inputs.nrows() != labels.len() {
            return Err(Error::Classifier(format!(
                "{} rows but {} labels",
                inputs.nrows(),
                labels.len()
            )));
        }
        if labels.is_empty() {
            return Ok(0.0);
        }

        let mut grad = Array2::<f32>::zeros(self.embeddings.raw_dim());
        let mut loss = 0.0f32;
        for (row, &label) in inputs.outer_iter().zip(labels) {
            if label >= PUZZLE_SIZE {
                return Err(Error::Classifier(format!("label {label} out of range")));
            }
            let blocks = self.slot_blocks(row)?;
            let slots = blocks.dot(&self.embeddings);
            let probs = softmax(&slot_logits(&slots));
            loss -= probs[label].max(f32::MIN_POSITIVE).ln();

            // dL/dz = p - onehot(label)
            let mut g = probs;
            g[label] -= 1.0;
            let total = slots.sum_axis(Axis(0));
            let weighted = slots.t().dot(&g);

            // dL/de_m = -g_m S + 2 g_m e_m - Σ_k g_k e_k
            let mut slot_grad = Array2::<f32>::zeros(slots.raw_dim());
            for (m, mut out) in slot_grad.outer_iter_mut().enumerate() {
                let e_m = slots.row(m);
                out.assign(&(&e_m * (2.0 * g[m]) - &total * g[m] - &weighted));
            }
            grad += &blocks.t().dot(&slot_grad);
        }

        let n = labels.len() as f32;
        let loss = loss / n;
        if !loss.is_finite() {
            return Err(Error::Classifier(format!("non-finite loss {loss}")));
        }
        self.embeddings.scaled_add(-self.learning_rate / n, &grad);
        Ok(loss)
    }

    fn predict(&self, row: ArrayView1<'_, f32>) -> Result<usize> {
        let logits = self.logits(row)?;
        let mut best = 0;
        for (k, &z) in logits.iter().enumerate() {
            if z > logits[best] {
                best = k;
            }
        }
        Ok(best)
    }

    fn snapshot(&self) -> TiedEmbeddingSnapshot {
        TiedEmbeddingSnapshot {
            vocab_len: self.vocab_len,
            learning_rate: self.learning_rate,
            embeddings: self.embeddings.clone(),
        }
    }

    fn name(&self) -> &'static str {
        "TiedEmbeddingClassifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::puzzle::EncodedPuzzles;

    // Vocabulary of 3 tokens; slots 0..4 use token 0, odd slot uses token 2.
    fn row_with_odd_at(odd: usize) -> Array1<f32> {
        let mut row = Array1::zeros(3 * PUZZLE_SIZE);
        for slot in 0..PUZZLE_SIZE {
            let token = if slot == odd { 2 } else { 0 };
            row[slot * 3 + token] = 1.0;
        }
        row
    }

    fn toy_data() -> EncodedPuzzles {
        let rows: Vec<Array1<f32>> = (0..PUZZLE_SIZE).map(row_with_odd_at).collect();
        let views: Vec<_> = rows.iter().map(|r| r.view()).collect();
        let inputs = ndarray::stack(Axis(0), &views).unwrap();
        EncodedPuzzles::new(inputs, (0..PUZZLE_SIZE).collect())
    }

    #[test]
    fn test_logits_pick_least_similar_slot() {
        let clf = TiedEmbeddingClassifier::from_snapshot(TiedEmbeddingSnapshot {
            vocab_len: 3,
            learning_rate: 0.1,
            embeddings: array![[1.0, 0.0], [0.0, 1.0], [-1.0, 0.0]],
        })
        .unwrap();
        let row = row_with_odd_at(3);
        assert_eq!(clf.predict(row.view()).unwrap(), 3);
        let logits = clf.logits(row.view()).unwrap();
        // S = [3, 0]: regular slot 1 - 3, odd slot 1 + 3
        assert_abs_diff_eq!(logits[0], -2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(logits[3], 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_training_reduces_loss() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut clf = TiedEmbeddingClassifier::new(3, 4, 0.2, &mut rng);
        let data = toy_data();
        let first = clf.train_step(data.inputs(), data.labels()).unwrap();
        let mut last = first;
        for _ in 0..200 {
            last = clf.train_step(data.inputs(), data.labels()).unwrap();
        }
        assert!(last < first, "loss {first} -> {last}");
        assert_eq!(clf.evaluate(&data).unwrap(), 1.0);
    }

    #[test]
    fn test_width_mismatch_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let clf = TiedEmbeddingClassifier::new(4, 2, 0.1, &mut rng);
        let row = Array1::<f32>::zeros(7);
        assert!(matches!(clf.predict(row.view()), Err(Error::Classifier(_))));
    }

    #[test]
    fn test_bad_labels_are_errors() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut clf = TiedEmbeddingClassifier::new(3, 2, 0.1, &mut rng);
        let data = toy_data();
        assert!(clf.train_step(data.inputs(), &[0, 1]).is_err());
        assert!(clf.train_step(data.inputs(), &[0, 1, 2, 3, 9]).is_err());
    }

    #[test]
    fn test_snapshot_restores_predictions() {
        let mut rng = StdRng::seed_from_u64(3);
        let clf = TiedEmbeddingClassifier::new(3, 4, 0.1, &mut rng);
        let json = serde_json::to_string(&clf.snapshot()).unwrap();
        let restored =
            TiedEmbeddingClassifier::from_snapshot(serde_json::from_str(&json).unwrap()).unwrap();
        let data = toy_data();
        assert_eq!(clf.evaluate(&data).unwrap(), restored.evaluate(&data).unwrap());
        assert_eq!(restored.dim(), 4);
    }

    #[test]
    fn test_evaluate_empty_is_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let clf = TiedEmbeddingClassifier::new(3, 2, 0.1, &mut rng);
        let empty = EncodedPuzzles::new(Array2::zeros((0, 15)), Vec::new());
        assert_eq!(clf.evaluate(&empty).unwrap(), 0.0);
    }
}
