//! Fixed-width numeric encoding of puzzles
//!
//! Each puzzle becomes one row of width `vocab.len() * PUZZLE_SIZE`: one
//! multi-hot block per slot, marking the slot concept's tokens. The label is
//! the display index of the odd concept.

use ndarray::{s, Array1, Array2, ArrayView2, ArrayViewMut1, Axis};
use rand::Rng;

use super::types::{Presentation, Puzzle, PuzzleSet, PUZZLE_SIZE};
use super::vocab::Vocabulary;

/// Encoded inputs with their labels
#[derive(Debug, Clone)]
pub struct EncodedPuzzles {
    inputs: Array2<f32>,
    labels: Vec<usize>,
}

impl EncodedPuzzles {
    /// Pair an input matrix with labels (row count must match)
    pub fn new(inputs: Array2<f32>, labels: Vec<usize>) -> Self {
        debug_assert_eq!(inputs.nrows(), labels.len());
        Self { inputs, labels }
    }

    /// Input matrix, one row per puzzle
    pub fn inputs(&self) -> ArrayView2<'_, f32> {
        self.inputs.view()
    }

    /// Odd-slot index per row
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row width
    pub fn width(&self) -> usize {
        self.inputs.ncols()
    }

    /// Rows at the given indices, in that order
    pub fn select(&self, rows: &[usize]) -> Self {
        Self {
            inputs: self.inputs.select(Axis(0), rows),
            labels: rows.iter().map(|&i| self.labels[i]).collect(),
        }
    }
}

fn write_slot(
    mut block: ArrayViewMut1<'_, f32>,
    vocab: &Vocabulary,
    presentation: &Presentation,
    slot: usize,
) {
    for index in vocab.concept_indices(&presentation.slots()[slot]) {
        block[index] = 1.0;
    }
}

/// Encode one presentation into a row
pub fn encode_presentation(presentation: &Presentation, vocab: &Vocabulary) -> Array1<f32> {
    let width = vocab.len();
    let mut row = Array1::zeros(width * PUZZLE_SIZE);
    for slot in 0..PUZZLE_SIZE {
        write_slot(
            row.slice_mut(s![slot * width..(slot + 1) * width]),
            vocab,
            presentation,
            slot,
        );
    }
    row
}

/// Encode a puzzle in canonical order (odd one last), e.g. for prediction
pub fn encode_puzzle(puzzle: &Puzzle, vocab: &Vocabulary) -> Array1<f32> {
    encode_presentation(&Presentation::canonical(puzzle), vocab)
}

/// Encode a set for training or evaluation.
///
/// Every puzzle is shuffled independently so the odd concept lands on a
/// random slot; otherwise every label would be the same.
pub fn encode_puzzles<R: Rng + ?Sized>(set: &PuzzleSet, rng: &mut R) -> EncodedPuzzles {
    let vocab = set.vocabulary();
    let width = vocab.len();
    let mut inputs = Array2::zeros((set.len(), width * PUZZLE_SIZE));
    let mut labels = Vec::with_capacity(set.len());
    for (mut row, puzzle) in inputs.outer_iter_mut().zip(set.iter()) {
        let presentation = puzzle.present(rng);
        for slot in 0..PUZZLE_SIZE {
            write_slot(
                row.slice_mut(s![slot * width..(slot + 1) * width]),
                vocab,
                &presentation,
                slot,
            );
        }
        labels.push(presentation.answer());
    }
    EncodedPuzzles::new(inputs, labels)
}

