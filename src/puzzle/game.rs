//! Interactive odd-one-out game
//!
//! Puzzles are shown shuffled; the player types the word they think does
//! not belong. A wrong answer costs a life; the game ends when lives run out,
//! the puzzles run out, or input closes.

use std::io::{BufRead, Write};

use rand::Rng;

use super::types::Puzzle;
use crate::error::Result;

/// Lives a player starts with
pub const DEFAULT_LIVES: usize = 100;

/// Outcome of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// Correct answers
    pub score: usize,
    /// Puzzles answered
    pub answered: usize,
    /// Lives remaining
    pub lives_left: usize,
}

impl GameSummary {
    /// Whether the player ran out of lives
    pub fn game_over(&self) -> bool {
        self.lives_left == 0
    }

    /// Percentage of answered puzzles solved (0.0 when none answered)
    pub fn percent_correct(&self) -> f64 {
        if self.answered == 0 {
            return 0.0;
        }
        100.0 * self.score as f64 / self.answered as f64
    }
}

/// Run a game over `puzzles`, reading guesses from `input`
pub fn play<I, O, R>(
    puzzles: &[Puzzle],
    lives: usize,
    input: &mut I,
    output: &mut O,
    rng: &mut R,
) -> Result<GameSummary>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let mut summary = GameSummary {
        score: 0,
        answered: 0,
        lives_left: lives,
    };

    for puzzle in puzzles {
        if summary.game_over() {
            break;
        }
        let presentation = puzzle.present(rng);
        writeln!(output, "\nPUZZLE:")?;
        for concept in presentation.slots() {
            writeln!(output, "  {}", concept.display_name())?;
        }
        writeln!(output, "You have {} lives left.", summary.lives_left)?;
        write!(output, "Which word is the odd one out? ")?;
        output.flush()?;

        let mut guess = String::new();
        if input.read_line(&mut guess)? == 0 {
            break;
        }
        summary.answered += 1;

        writeln!(output, "Correct answer: {}", presentation.odd().display_name())?;
        if presentation.is_correct_word(&guess) {
            summary.score += 1;
            writeln!(output, "Good work!")?;
        } else {
            summary.lives_left -= 1;
            writeln!(output, "Incorrect.")?;
        }
    }

    if summary.game_over() {
        writeln!(
            output,
            "\nGAME OVER! You got {:.1}% correct.",
            summary.percent_correct()
        )?;
    } else {
        writeln!(
            output,
            "\nScore: {}/{} ({:.1}%)",
            summary.score,
            summary.answered,
            summary.percent_correct()
        )?;
    }
    Ok(summary)
}
