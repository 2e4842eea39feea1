//! Formatting utilities for terminal output

use crate::core::{Feedback, KEYBOARD_ROWS, KeyboardState, LetterStatus, WORD_LENGTH, Word};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile, e.g. " H " on green
#[must_use]
pub fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_truecolor(217, 119, 6).bold(),
        LetterStatus::Absent => text.bright_black().on_black(),
        LetterStatus::Initial => text.white().bold(),
    }
}

/// A scored guess as a row of tiles
#[must_use]
pub fn format_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| tile(letter, status).to_string())
        .collect()
}

/// The pending input padded with blanks to a full row
#[must_use]
pub fn format_pending(input: &str) -> String {
    let mut row: String = input
        .chars()
        .map(|letter| tile(letter, LetterStatus::Initial).to_string())
        .collect();
    for _ in input.chars().count()..WORD_LENGTH {
        row.push_str(&" · ".bright_black().to_string());
    }
    row
}

/// Keyboard rows with every letter colored by its best-known status
#[must_use]
pub fn format_keyboard(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| tile(letter, keyboard.status(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn row_shows_letters_in_order() {
        plain();
        let guess = Word::new("HARPY").unwrap();
        let target = Word::new("HARRY").unwrap();
        let row = format_row(&guess, &Feedback::evaluate(&guess, &target));
        assert_eq!(row, " H  A  R  P  Y ");
    }

    #[test]
    fn pending_is_padded_to_five_cells() {
        plain();
        assert_eq!(format_pending("HA"), " H  A  ·  ·  · ");
        assert_eq!(format_pending(""), " ·  ·  ·  ·  · ");
    }

    #[test]
    fn keyboard_has_three_indented_rows() {
        plain();
        let lines = format_keyboard(&KeyboardState::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" Q "));
        assert!(lines[1].starts_with("   A "));
        assert!(lines[2].starts_with("     Z "));
    }
}
