//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a word list file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: '{text}' is not a valid word: {source}")]
    InvalidEntry {
        line: usize,
        text: String,
        #[source]
        source: WordError,
    },
}

/// Parse a word list, one word per line
///
/// Blank lines and lines starting with `#` are skipped. Any other line that is
/// not a valid 5-letter word is an error, so a broken list is caught at
/// startup instead of producing an unwinnable week.
///
/// # Errors
///
/// Returns `LoadError::InvalidEntry` for the first invalid line (1-based).
pub fn parse_word_list(content: &str) -> Result<Vec<Word>, LoadError> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            Word::new(text).map_err(|source| LoadError::InvalidEntry {
                line,
                text: text.to_string(),
                source,
            })
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains an invalid entry.
///
/// # Examples
/// ```no_run
/// use hauspokal_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/weekly.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_word_list(&content)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hauspokal_wordle::wordlists::loader::words_from_slice;
/// use hauspokal_wordle::wordlists::WEEKLY;
///
/// let words = words_from_slice(WEEKLY);
/// assert_eq!(words.len(), WEEKLY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
