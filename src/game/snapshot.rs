//! Persisted game snapshots
//!
//! A snapshot is only ever applied to a game with the same target word. Any
//! other snapshot is stale and gets discarded whole; nothing is merged.

use super::round::{Game, RoundState};
use crate::core::Word;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stored form of a game in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub target_word: String,
    pub state: RoundState,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// Reasons a snapshot cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot is for '{found}', current target is '{expected}'")]
    Stale { found: String, expected: String },
    #[error("malformed snapshot: {0}")]
    Malformed(String),
}

/// What happened when a game was restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No snapshot was available
    Fresh,
    /// The snapshot matched and was applied
    Restored,
    /// The snapshot was ignored
    Discarded(SnapshotError),
}

impl Snapshot {
    /// Parse a snapshot from JSON
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Malformed` if the JSON does not describe a
    /// snapshot.
    pub fn parse(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Malformed(e.to_string()))
    }

    /// Serialize to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// When the snapshot was taken
    #[must_use]
    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Extract the round state for `target`
    ///
    /// # Errors
    ///
    /// - `SnapshotError::Stale` if the snapshot belongs to another target
    /// - `SnapshotError::Malformed` if the state breaks the round invariants
    pub fn into_state_for(self, target: &Word) -> Result<RoundState, SnapshotError> {
        let same_target = Word::new(&self.target_word).is_ok_and(|word| word == *target);
        if !same_target {
            return Err(SnapshotError::Stale {
                found: self.target_word,
                expected: target.text().to_string(),
            });
        }

        self.state
            .validate(target)
            .map_err(SnapshotError::Malformed)?;
        Ok(self.state)
    }
}

impl Game {
    /// Build a game for `target`, resuming `snapshot` when it belongs to it
    #[must_use]
    pub fn restore(target: Word, snapshot: Option<Snapshot>) -> (Self, RestoreOutcome) {
        let Some(snapshot) = snapshot else {
            return (Self::new(target), RestoreOutcome::Fresh);
        };

        match snapshot.into_state_for(&target) {
            Ok(state) => (Self::from_parts(target, state), RestoreOutcome::Restored),
            Err(err) => (Self::new(target), RestoreOutcome::Discarded(err)),
        }
    }

    /// Capture the current state
    #[must_use]
    pub fn snapshot(&self, now: DateTime<Utc>) -> Snapshot {
        Snapshot {
            target_word: self.target().text().to_string(),
            state: self.state().clone(),
            timestamp: now.timestamp_millis(),
        }
    }
}
