//! Best-known status per letter across all submitted guesses
//!
//! Drives the keyboard hints in both the TUI and the line-based mode.

use super::feedback::{Feedback, LetterStatus};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Keyboard layout rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Letter statuses aggregated over a guess history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, LetterStatus>,
}

impl KeyboardState {
    /// Aggregate the statuses of every guess in `history` against `target`
    ///
    /// A letter keeps the best status it has received anywhere:
    /// Correct beats Present, Present beats Absent.
    #[must_use]
    pub fn from_history(history: &[Word], target: &Word) -> Self {
        let mut letters: FxHashMap<u8, LetterStatus> = FxHashMap::default();

        for guess in history {
            let feedback = Feedback::evaluate(guess, target);
            for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
                let best = letters.entry(letter).or_insert(status);
                *best = (*best).max(status);
            }
        }

        Self { letters }
    }

    /// Status of a letter; `Initial` if it was never guessed
    #[must_use]
    pub fn status(&self, letter: char) -> LetterStatus {
        let key = letter.to_ascii_uppercase() as u8;
        self.letters
            .get(&key)
            .copied()
            .unwrap_or(LetterStatus::Initial)
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn guessed_letters(&self) -> usize {
        self.letters.len()
    }
}
