//! Player profiles

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four houses a player can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum House {
    Gryffindor,
    Slytherin,
    Ravenclaw,
    Hufflepuff,
}

impl House {
    pub const ALL: [Self; 4] = [
        Self::Gryffindor,
        Self::Slytherin,
        Self::Ravenclaw,
        Self::Hufflepuff,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gryffindor => "Gryffindor",
            Self::Slytherin => "Slytherin",
            Self::Ravenclaw => "Ravenclaw",
            Self::Hufflepuff => "Hufflepuff",
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for House {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|house| house.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProfileError::UnknownHouse(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("player name must not be empty")]
    EmptyName,
    #[error("unknown house '{0}' (expected Gryffindor, Slytherin, Ravenclaw or Hufflepuff)")]
    UnknownHouse(String),
}

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlayer")]
pub struct Player {
    name: String,
    house: House,
}

#[derive(Deserialize)]
struct RawPlayer {
    name: String,
    house: House,
}

impl TryFrom<RawPlayer> for Player {
    type Error = ProfileError;

    fn try_from(raw: RawPlayer) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.house)
    }
}

impl Player {
    /// Create a player; the name is trimmed and must not be empty
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyName` for a blank name.
    pub fn new(name: impl AsRef<str>, house: House) -> Result<Self, ProfileError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            house,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn house(&self) -> House {
        self.house
    }

    /// Key for this player's stored snapshot, e.g. `gryffindor-hermione-granger`
    #[must_use]
    pub fn storage_key(&self) -> String {
        let mut key = self.house.name().to_ascii_lowercase();
        key.push('-');
        let mut last_dash = true;

        for c in self.name.chars().flat_map(char::to_lowercase) {
            if c.is_alphanumeric() {
                key.push(c);
                last_dash = false;
            } else if !last_dash {
                key.push('-');
                last_dash = true;
            }
        }

        key.trim_end_matches('-').to_string()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.house)
    }
}
