//! Game word representation
//!
//! A Word stores a validated 5-letter word in uppercase. Targets and accepted
//! guesses are both Words, so comparison is a plain byte comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter uppercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// Length is counted in characters, so `"ÄPFEL"` is rejected as non-ASCII
    /// rather than as too long.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hauspokal_wordle::core::Word;
    ///
    /// let word = Word::new("harry").unwrap();
    /// assert_eq!(word.text(), "HARRY");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sn4pe").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref();

        let len = raw.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !raw.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !raw.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = raw.to_ascii_uppercase();
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific (uppercase) letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("HARRY").unwrap();
        assert_eq!(word.text(), "HARRY");
        assert_eq!(word.chars(), b"HARRY");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("snape").unwrap();
        assert_eq!(word.text(), "SNAPE");

        let word2 = Word::new("SnApE").unwrap();
        assert_eq!(word2.text(), "SNAPE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("hallow"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(matches!(Word::new("owl"), Err(WordError::InvalidLength(3))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_non_ascii() {
        assert_eq!(Word::new("äpfel"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("sn4pe").is_err()); // Number
        assert!(Word::new("owl y").is_err()); // Space
        assert!(Word::new("harr!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("dobby").unwrap();
        assert_eq!(word.char_at(0), b'D');
        assert_eq!(word.char_at(2), b'B');
        assert_eq!(word.char_at(4), b'Y');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("snape").unwrap();
        assert!(word.has_letter(b'S'));
        assert!(word.has_letter(b'E'));
        assert!(!word.has_letter(b'R'));
        assert!(!word.has_letter(b's'));
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("harry").unwrap(), Word::new("HARRY").unwrap());
        assert_ne!(Word::new("harry").unwrap(), Word::new("harpy").unwrap());
    }

    #[test]
    fn word_serde_as_plain_string() {
        let word = Word::new("cloak").unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"CLOAK\"");

        let back: Word = serde_json::from_str("\"wands\"").unwrap();
        assert_eq!(back.text(), "WANDS");

        assert!(serde_json::from_str::<Word>("\"HALLOW\"").is_err());
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "broom".parse().unwrap();
        assert_eq!(format!("{word}"), "BROOM");
    }
}
