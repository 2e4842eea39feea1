//! Application configuration
//!
//! Loaded once at startup from a TOML file. Every key is optional; a missing
//! file means defaults (weekly rotation, strict allowlist, no webhook).
//! Broken word lists are rejected here, before any game starts.

use crate::core::{Word, WordError};
use crate::target::{TargetPolicy, TargetResolver, WeeklyRotation};
use crate::wordlists::loader::{LoadError, load_from_file};
use crate::wordlists::{ALLOWED, Lexicon, loader::words_from_slice};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Directory name used under the platform config and data directories
pub const APP_DIR: &str = "hauspokal-wordle";

const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("word list is empty")]
    EmptyWordList,
    #[error("invalid target word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("target policy 'fixed' needs a `word`")]
    MissingFixedWord,
    #[error(transparent)]
    WordList(#[from] LoadError),
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("no data directory available on this platform; set storage.data_dir")]
    NoDataDir,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Weekly,
    Fixed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    pub policy: PolicyKind,
    pub word: Option<String>,
    pub words_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuessConfig {
    pub strict: bool,
    pub allowlist_file: Option<PathBuf>,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            strict: true,
            allowlist_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub webhook_url: Option<String>,
    pub timeout_ms: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
}

/// Root of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub target: TargetConfig,
    pub guesses: GuessConfig,
    pub report: ReportConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// location is used if present, otherwise defaults apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` or `ConfigError::Parse` for unreadable or
    /// invalid files.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) if p.exists() => p,
                _ => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns the TOML error for invalid input or unknown keys.
    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Build the target resolver
    ///
    /// # Errors
    ///
    /// Fails for an empty or invalid word list, or a fixed policy without a
    /// valid word.
    pub fn build_resolver(&self) -> Result<TargetResolver, ConfigError> {
        let policy = match self.target.policy {
            PolicyKind::Fixed => {
                let raw = self
                    .target
                    .word
                    .as_deref()
                    .ok_or(ConfigError::MissingFixedWord)?;
                let word = Word::new(raw).map_err(|source| ConfigError::InvalidWord {
                    word: raw.to_string(),
                    source,
                })?;
                TargetPolicy::Fixed(word)
            }
            PolicyKind::Weekly => {
                let rotation = match &self.target.words_file {
                    Some(path) => WeeklyRotation::new(load_from_file(path)?)?,
                    None => WeeklyRotation::embedded()?,
                };
                TargetPolicy::Weekly(rotation)
            }
        };
        Ok(TargetResolver::new(policy))
    }

    /// Build the guess lexicon; every possible target is always legal
    ///
    /// # Errors
    ///
    /// Fails if a configured allowlist file cannot be loaded or is empty.
    pub fn build_lexicon(&self, resolver: &TargetResolver) -> Result<Lexicon, ConfigError> {
        if !self.guesses.strict {
            return Ok(Lexicon::Permissive);
        }

        let allowed = match &self.guesses.allowlist_file {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(ALLOWED),
        };
        if allowed.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        Ok(Lexicon::strict(allowed).with_words(resolver.candidates()))
    }

    /// Directory holding snapshots, the profile and the log file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoDataDir` when neither the config nor the
    /// platform provide one.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        self.storage
            .data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR)))
            .ok_or(ConfigError::NoDataDir)
    }

    /// Webhook request timeout
    #[must_use]
    pub const fn report_timeout(&self) -> Duration {
        Duration::from_millis(self.report.timeout_ms)
    }
}

/// `<config dir>/hauspokal-wordle/config.toml`
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}
