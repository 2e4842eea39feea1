//! Round tracking: the `Playing → Won | Lost` state machine
//!
//! A `Game` pairs the target word with the mutable round state. Guess history
//! is append-only; rejected submissions leave the state untouched and never
//! count towards the round limit.

use crate::core::{Feedback, KeyboardState, WORD_LENGTH, Word};
use crate::wordlists::Lexicon;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of accepted guesses per game
pub const MAX_ROUNDS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Why a submission was rejected
///
/// `row` is the row the guess would have filled, for "shake row N" feedback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("not enough letters ({len}/5)")]
    InvalidLength { row: usize, len: usize },
    #[error("'{word}' is not in the word list")]
    UnknownWord { row: usize, word: String },
    #[error("the game is already over")]
    GameOver,
}

impl GuessError {
    /// Row to flag in the UI, if any
    #[must_use]
    pub const fn row(&self) -> Option<usize> {
        match self {
            Self::InvalidLength { row, .. } | Self::UnknownWord { row, .. } => Some(*row),
            Self::GameOver => None,
        }
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Zero-based row the guess was placed in
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// Serializable round state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    pub(crate) history: Vec<Word>,
    pub(crate) pending_input: String,
    pub(crate) is_over: bool,
    pub(crate) is_winner: bool,
    #[serde(default)]
    pub(crate) has_reported: bool,
}

impl RoundState {
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub const fn is_winner(&self) -> bool {
        self.is_winner
    }

    #[must_use]
    pub const fn has_reported(&self) -> bool {
        self.has_reported
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        match (self.is_over, self.is_winner) {
            (false, _) => GameStatus::Playing,
            (true, true) => GameStatus::Won,
            (true, false) => GameStatus::Lost,
        }
    }

    /// Check the structural invariants against `target`
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated invariant.
    pub(crate) fn validate(&self, target: &Word) -> Result<(), String> {
        let len = self.history.len();
        if len > MAX_ROUNDS {
            return Err(format!("{len} guesses exceed the limit of {MAX_ROUNDS}"));
        }
        if self.pending_input.len() > WORD_LENGTH
            || !self.pending_input.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(format!("invalid pending input '{}'", self.pending_input));
        }
        if self.is_winner && !self.is_over {
            return Err("winner flag set on an unfinished game".to_string());
        }
        if self.has_reported && !self.is_over {
            return Err("reported flag set on an unfinished game".to_string());
        }

        let hit = self.history.iter().position(|g| g == target);
        let won = hit.is_some();
        if let Some(pos) = hit
            && pos + 1 != len
        {
            return Err("guesses recorded after the winning guess".to_string());
        }
        if self.is_winner != won {
            return Err("winner flag does not match history".to_string());
        }
        let should_be_over = won || len == MAX_ROUNDS;
        if self.is_over != should_be_over {
            return Err("game-over flag does not match history".to_string());
        }
        Ok(())
    }
}

/// One game: a fixed target and the round state played against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    target: Word,
    state: RoundState,
}

impl Game {
    /// Start an empty game
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            state: RoundState::default(),
        }
    }

    /// Resume from an already validated state
    pub(crate) const fn from_parts(target: Word, state: RoundState) -> Self {
        Self { target, state }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.state.history
    }

    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.state.pending_input
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over
    }

    #[must_use]
    pub const fn is_winner(&self) -> bool {
        self.state.is_winner
    }

    #[must_use]
    pub const fn has_reported(&self) -> bool {
        self.state.has_reported
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.state.history.len()
    }

    /// Every accepted guess with its feedback, oldest first
    #[must_use]
    pub fn rows(&self) -> Vec<(Word, Feedback)> {
        self.state
            .history
            .iter()
            .map(|guess| (guess.clone(), Feedback::evaluate(guess, &self.target)))
            .collect()
    }

    /// Best-known status of every guessed letter
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_history(&self.state.history, &self.target)
    }

    /// Add a letter to the pending input
    ///
    /// Returns `false` (no change) when the game is over, the input is full,
    /// or `c` is not an ASCII letter.
    pub fn append_char(&mut self, c: char) -> bool {
        if self.is_over() || self.state.pending_input.len() >= WORD_LENGTH || !c.is_ascii_alphabetic()
        {
            return false;
        }
        self.state.pending_input.push(c.to_ascii_uppercase());
        true
    }

    /// Remove the last pending letter
    ///
    /// Returns `false` (no change) when the game is over or the input is empty.
    pub fn delete_char(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.state.pending_input.pop().is_some()
    }

    /// Submit the pending input as a guess
    ///
    /// # Errors
    ///
    /// - `GuessError::GameOver` if the game has already finished
    /// - `GuessError::InvalidLength` if the pending input is not 5 letters
    /// - `GuessError::UnknownWord` if `lexicon` rejects the word
    ///
    /// A rejected submission changes nothing.
    pub fn submit(&mut self, lexicon: &Lexicon) -> Result<SubmitOutcome, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let row = self.state.history.len();
        let pending = &self.state.pending_input;

        let len = pending.chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::InvalidLength { row, len });
        }

        if !lexicon.is_legal(pending) {
            return Err(GuessError::UnknownWord {
                row,
                word: pending.to_uppercase(),
            });
        }

        let guess = Word::new(pending).map_err(|_| GuessError::UnknownWord {
            row,
            word: pending.to_uppercase(),
        })?;

        self.state.pending_input.clear();
        self.state.history.push(guess.clone());

        if guess == self.target {
            self.state.is_over = true;
            self.state.is_winner = true;
        } else if self.state.history.len() == MAX_ROUNDS {
            self.state.is_over = true;
        }

        let status = self.status();
        tracing::debug!(row, guess = %guess, ?status, "guess accepted");

        Ok(SubmitOutcome {
            row,
            feedback: Feedback::evaluate(&guess, &self.target),
            guess,
            status,
        })
    }

    /// Record that the result has been reported
    ///
    /// Only a finished game can be reported, and only once. Returns `true` if
    /// the flag changed.
    pub fn mark_reported(&mut self) -> bool {
        if !self.is_over() || self.state.has_reported {
            return false;
        }
        self.state.has_reported = true;
        true
    }
}
