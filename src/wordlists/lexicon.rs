//! Guess legality

use super::embedded::{ALLOWED, WEEKLY};
use super::loader::words_from_slice;
use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// Decides whether a submitted string is a legal guess
#[derive(Debug, Clone)]
pub enum Lexicon {
    /// Any 5 ASCII letters are legal
    Permissive,
    /// Only exact members of the allowlist are legal
    Strict(FxHashSet<Word>),
}

impl Lexicon {
    /// Strict lexicon over the given words
    #[must_use]
    pub fn strict(words: impl IntoIterator<Item = Word>) -> Self {
        Self::Strict(words.into_iter().collect())
    }

    /// Strict lexicon over the embedded allowlist plus the embedded rotation
    #[must_use]
    pub fn embedded() -> Self {
        Self::strict(words_from_slice(ALLOWED)).with_words(words_from_slice(WEEKLY))
    }

    /// Add words (typically the possible targets) to a strict allowlist
    ///
    /// Has no effect on a permissive lexicon.
    #[must_use]
    pub fn with_words(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        if let Self::Strict(set) = &mut self {
            set.extend(words);
        }
        self
    }

    /// Check whether `candidate` may be submitted
    ///
    /// Length must be 5; in strict mode the word must also be in the allowlist.
    /// Matching is case-insensitive and exact.
    #[must_use]
    pub fn is_legal(&self, candidate: &str) -> bool {
        if candidate.chars().count() != WORD_LENGTH {
            return false;
        }

        let Ok(word) = Word::new(candidate) else {
            return false;
        };

        match self {
            Self::Permissive => true,
            Self::Strict(set) => set.contains(&word),
        }
    }

    /// Number of allowlisted words; `None` when permissive
    #[must_use]
    pub fn allowlist_size(&self) -> Option<usize> {
        match self {
            Self::Permissive => None,
            Self::Strict(set) => Some(set.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::strict(words_from_slice(words))
    }

    #[test]
    fn strict_accepts_members_case_insensitively() {
        let lex = lexicon(&["HARRY", "HARPY"]);
        assert!(lex.is_legal("HARRY"));
        assert!(lex.is_legal("harpy"));
        assert!(lex.is_legal("HaRrY"));
    }

    #[test]
    fn strict_rejects_non_members() {
        let lex = lexicon(&["HARRY"]);
        assert!(!lex.is_legal("HARRS"));
        assert!(!lex.is_legal("HARR"));
        assert!(!lex.is_legal("HARRYS"));
    }

    #[test]
    fn permissive_accepts_any_five_letters() {
        let lex = Lexicon::Permissive;
        assert!(lex.is_legal("QXZQX"));
        assert!(!lex.is_legal("QXZQ"));
        assert!(!lex.is_legal("QX1QX"));
        assert_eq!(lex.allowlist_size(), None);
    }

    #[test]
    fn with_words_extends_strict_only() {
        let lex = lexicon(&["CLOAK"]).with_words(words_from_slice(&["OWLRY"]));
        assert!(lex.is_legal("OWLRY"));
        assert_eq!(lex.allowlist_size(), Some(2));

        let lex = Lexicon::Permissive.with_words(words_from_slice(&["OWLRY"]));
        assert!(matches!(lex, Lexicon::Permissive));
    }

    #[test]
    fn embedded_includes_allowlist_and_rotation() {
        let lex = Lexicon::embedded();
        assert!(lex.is_legal("crane"));
        assert!(lex.is_legal("snich"));
        assert!(!lex.is_legal("zzzzz"));
    }
}
