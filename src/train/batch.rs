//! Mini-batching over encoded puzzles

use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::model::PuzzleClassifier;
use crate::puzzle::EncodedPuzzles;

/// A training batch of encoded rows and their labels
#[derive(Clone, Debug)]
pub struct Batch {
    /// Encoded puzzles, one per row
    pub inputs: Array2<f32>,
    /// Odd-slot index per row
    pub labels: Vec<usize>,
}

impl Batch {
    /// Create a new batch
    pub fn new(inputs: Array2<f32>, labels: Vec<usize>) -> Self {
        Self { inputs, labels }
    }

    /// Number of rows
    pub fn size(&self) -> usize {
        self.labels.len()
    }
}

/// Split `data` into shuffled batches of at most `batch_size` rows
pub fn shuffled_batches<R: Rng + ?Sized>(
    data: &EncodedPuzzles,
    batch_size: usize,
    rng: &mut R,
) -> Vec<Batch> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.shuffle(rng);
    order
        .chunks(batch_size.max(1))
        .map(|rows| {
            let selected = data.select(rows);
            Batch::new(selected.inputs().to_owned(), selected.labels().to_vec())
        })
        .collect()
}

/// One pass over `data`, returning the mean batch loss (0.0 when empty)
pub fn train_epoch<C, R>(
    model: &mut C,
    data: &EncodedPuzzles,
    batch_size: usize,
    rng: &mut R,
) -> Result<f32>
where
    C: PuzzleClassifier + ?Sized,
    R: Rng + ?Sized,
{
    let batches = shuffled_batches(data, batch_size, rng);
    if batches.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for batch in &batches {
        total += model.train_step(batch.inputs.view(), &batch.labels)?;
    }
    Ok(total / batches.len() as f32)
}
