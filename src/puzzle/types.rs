//! Puzzle and puzzle set types

use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use super::vocab::Vocabulary;
use crate::lexicon::Concept;

/// Number of choices in a puzzle
pub const PUZZLE_SIZE: usize = 5;

/// Position of the odd concept in a canonical (unshuffled) puzzle
pub const ODD_SLOT: usize = PUZZLE_SIZE - 1;

/// Four related concepts followed by one unrelated concept.
///
/// The slot order is the canonical generation order; the odd concept is
/// always at [`ODD_SLOT`]. Identity is the slot tuple: the shared ancestor is
/// carried along for inspection but does not take part in equality.
#[derive(Debug, Clone)]
pub struct Puzzle {
    slots: [Arc<Concept>; PUZZLE_SIZE],
    ancestor: Arc<Concept>,
}

impl Puzzle {
    /// Assemble a puzzle with `odd` in the terminal slot
    pub fn new(siblings: [Arc<Concept>; 4], odd: Arc<Concept>, ancestor: Arc<Concept>) -> Self {
        let [a, b, c, d] = siblings;
        Self {
            slots: [a, b, c, d, odd],
            ancestor,
        }
    }

    /// All five concepts in canonical order
    pub fn slots(&self) -> &[Arc<Concept>; PUZZLE_SIZE] {
        &self.slots
    }

    /// The four related concepts
    pub fn siblings(&self) -> &[Arc<Concept>] {
        &self.slots[..ODD_SLOT]
    }

    /// The unrelated concept
    pub fn odd(&self) -> &Arc<Concept> {
        &self.slots[ODD_SLOT]
    }

    /// Shared ancestor whose closure holds the siblings but not the odd one
    pub fn ancestor(&self) -> &Arc<Concept> {
        &self.ancestor
    }

    /// Concept names in canonical order
    pub fn names(&self) -> [&str; PUZZLE_SIZE] {
        [
            self.slots[0].name(),
            self.slots[1].name(),
            self.slots[2].name(),
            self.slots[3].name(),
            self.slots[4].name(),
        ]
    }

    /// Shuffle the slots for display, remembering where the odd one went
    pub fn present<R: Rng + ?Sized>(&self, rng: &mut R) -> Presentation {
        let mut order: [usize; PUZZLE_SIZE] = [0, 1, 2, 3, 4];
        order.shuffle(rng);
        let answer = order.iter().position(|&i| i == ODD_SLOT).unwrap_or(ODD_SLOT);
        Presentation {
            slots: order.map(|i| Arc::clone(&self.slots[i])),
            answer,
        }
    }
}

impl PartialEq for Puzzle {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl Eq for Puzzle {}

impl Hash for Puzzle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slots.hash(state);
    }
}

/// A shuffled view of a puzzle with the index of the correct answer.
#[derive(Debug, Clone)]
pub struct Presentation {
    slots: [Arc<Concept>; PUZZLE_SIZE],
    answer: usize,
}

impl Presentation {
    /// Presentation without shuffling (odd one last)
    pub fn canonical(puzzle: &Puzzle) -> Self {
        Self {
            slots: puzzle.slots.clone(),
            answer: ODD_SLOT,
        }
    }

    /// Concepts in display order
    pub fn slots(&self) -> &[Arc<Concept>; PUZZLE_SIZE] {
        &self.slots
    }

    /// Display index of the odd concept
    pub fn answer(&self) -> usize {
        self.answer
    }

    /// The odd concept
    pub fn odd(&self) -> &Arc<Concept> {
        &self.slots[self.answer]
    }

    /// Whether a guessed index is the odd one
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.answer
    }

    /// Whether a typed guess names the odd concept (display name or full name)
    pub fn is_correct_word(&self, guess: &str) -> bool {
        let guess = guess.trim();
        let odd = self.odd();
        guess == odd.display_name() || guess == odd.name()
    }
}

/// Deduplicated puzzles tagged with the vocabulary used to encode them.
#[derive(Debug, Clone)]
pub struct PuzzleSet {
    puzzles: Vec<Puzzle>,
    vocab: Arc<Vocabulary>,
}

impl PuzzleSet {
    /// Collapse identical puzzles, keeping first-seen order
    pub fn new(puzzles: impl IntoIterator<Item = Puzzle>, vocab: Arc<Vocabulary>) -> Self {
        let mut seen = HashSet::new();
        let puzzles = puzzles
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();
        Self { puzzles, vocab }
    }

    /// Number of distinct puzzles
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Puzzles in first-seen order
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Iterate over the puzzles
    pub fn iter(&self) -> std::slice::Iter<'_, Puzzle> {
        self.puzzles.iter()
    }

    /// Vocabulary the set is encoded with
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }
}

impl<'a> IntoIterator for &'a PuzzleSet {
    type Item = &'a Puzzle;
    type IntoIter = std::slice::Iter<'a, Puzzle>;

    fn into_iter(self) -> Self::IntoIter {
        self.puzzles.iter()
    }
}
