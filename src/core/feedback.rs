//! Guess feedback calculation and representation
//!
//! Each position of a guess is classified as one of:
//! - Correct (letter in the right position)
//! - Present (letter appears somewhere in the target)
//! - Absent (letter not in the target)
//!
//! `Initial` marks an empty or not-yet-evaluated cell and never appears in the
//! feedback of a submitted guess.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single letter cell
///
/// Variants are ordered from least to most informative, so `max` picks the
/// best known status for a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Initial,
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Share glyph for this status
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Correct => "🟩",
            Self::Present => "🟧",
            Self::Absent => "⬛\u{fe0f}",
            Self::Initial => "⬜",
        }
    }
}

/// Feedback for one evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Build feedback from explicit statuses
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches as Correct
    /// 2. Second pass: every other position is Present if the target contains
    ///    the letter anywhere, otherwise Absent
    ///
    /// The second pass tests containment only; it does not consume letters. A
    /// target with a single `E` marks every misplaced `E` of the guess Present.
    ///
    /// # Examples
    /// ```
    /// use hauspokal_wordle::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("paper").unwrap();
    /// let target = Word::new("snape").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.statuses(), &[Present, Present, Present, Present, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];

        // Allow: Index needed to compare guess[i] with target[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = LetterStatus::Correct;
            }
        }

        for (i, status) in result.iter_mut().enumerate() {
            if *status != LetterStatus::Correct && target.has_letter(guess.char_at(i)) {
                *status = LetterStatus::Present;
            }
        }

        Self(result)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is Correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Render as a row of share glyphs, e.g. "🟩🟧⬛️🟩🟩"
    #[must_use]
    pub fn glyphs(&self) -> String {
        self.0.iter().map(|s| s.glyph()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyphs())
    }
}

/// Score `guess` against `target`; shorthand for [`Feedback::evaluate`]
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    Feedback::evaluate(guess, target)
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn score(guess: &str, target: &str) -> [LetterStatus; 5] {
        *Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).statuses()
    }

    #[test]
    fn harpy_against_harry() {
        // P is not in HARRY, Y lines up
        assert_eq!(
            score("HARPY", "HARRY"),
            [Correct, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn paper_against_snape() {
        // No position lines up; P, A, P, E are all contained in SNAPE
        assert_eq!(
            score("PAPER", "SNAPE"),
            [Present, Present, Present, Present, Absent]
        );
    }

    #[test]
    fn all_absent() {
        assert_eq!(score("QUILT", "SNAPE"), [Absent; 5]);
    }

    #[test]
    fn exact_match_is_perfect() {
        let word = Word::new("dobby").unwrap();
        let feedback = Feedback::evaluate(&word, &word);
        assert_eq!(feedback, Feedback::PERFECT);
        assert!(feedback.is_perfect());
    }

    #[test]
    fn duplicates_are_not_frequency_limited() {
        // STAGS has one A: the correct A does not stop the other A being Present
        assert_eq!(
            score("ALARM", "STAGS"),
            [Present, Absent, Correct, Absent, Absent]
        );

        // One E in the target, three misplaced Es in the guess: all Present
        assert_eq!(
            score("EERIE", "CHEST"),
            [Present, Present, Absent, Absent, Present]
        );
    }

    #[test]
    fn correct_letter_does_not_consume_present() {
        // SPELL has one E at position 2; the remaining Es still mark Present
        assert_eq!(
            score("EEEEE", "SPELL"),
            [Present, Present, Correct, Present, Present]
        );
    }

    #[test]
    fn containment_rule_holds_position_by_position() {
        let pairs = [
            ("CRANE", "SLATE"),
            ("ROBOT", "FLOOR"),
            ("SPEED", "ERASE"),
            ("WITCH", "WANDS"),
            ("MAGIC", "CHARM"),
        ];

        for (guess, target) in pairs {
            let statuses = score(guess, target);
            for (i, status) in statuses.iter().enumerate() {
                let g = guess.as_bytes()[i];
                let expected = if g == target.as_bytes()[i] {
                    Correct
                } else if target.as_bytes().contains(&g) {
                    Present
                } else {
                    Absent
                };
                assert_eq!(*status, expected, "{guess} vs {target} at {i}");
            }
        }
    }

    #[test]
    fn evaluate_is_pure() {
        let guess = Word::new("PAPER").unwrap();
        let target = Word::new("SNAPE").unwrap();
        assert_eq!(evaluate(&guess, &target), evaluate(&guess, &target));
    }

    #[test]
    fn count_statuses() {
        let guess = Word::new("HARPY").unwrap();
        let target = Word::new("HARRY").unwrap();
        let feedback = evaluate(&guess, &target);

        assert_eq!(feedback.count(Correct), 4);
        assert_eq!(feedback.count(Absent), 1);
        assert_eq!(feedback.count(Present), 0);
    }

    #[test]
    fn glyph_row() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Correct]);
        assert_eq!(feedback.glyphs(), "🟩🟧⬛\u{fe0f}🟩🟩");
    }

    #[test]
    fn status_order_prefers_correct() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert!(Absent > LetterStatus::Initial);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Present).unwrap(), "\"present\"");
    }
}
