//! Local persistence of snapshots and the registered profile
//!
//! Plain JSON files in the data directory. Writes go through a temporary file
//! and a rename so a crash never leaves half a snapshot behind. Reads are
//! forgiving: anything unreadable is logged and treated as absent.

use crate::game::{Player, Snapshot};
use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const PROFILE_FILE: &str = "profile.json";
const SNAPSHOT_DIR: &str = "snapshots";

/// File-backed store rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn snapshot_path(&self, key: &str) -> PathBuf {
        self.dir.join(SNAPSHOT_DIR).join(format!("{key}.json"))
    }

    fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    /// Load the snapshot stored under `key`, if any usable one exists
    #[must_use]
    pub fn load_snapshot(&self, key: &str) -> Option<Snapshot> {
        let raw = read_if_present(&self.snapshot_path(key))?;
        match Snapshot::parse(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable snapshot");
                None
            }
        }
    }

    /// Store `snapshot` under `key`, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_snapshot(&self, key: &str, snapshot: &Snapshot) -> Result<()> {
        write_json(&self.snapshot_path(key), snapshot)
    }

    /// Load the registered player, if any
    #[must_use]
    pub fn load_profile(&self) -> Option<Player> {
        read_json(&self.profile_path())
    }

    /// Register `player`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_profile(&self, player: &Player) -> Result<()> {
        write_json(&self.profile_path(), player)
    }

    /// Forget the registered player; snapshots are kept
    ///
    /// Returns `true` if a profile was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear_profile(&self) -> Result<bool> {
        match fs::remove_file(self.profile_path()) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).context("failed to remove profile"),
        }
    }
}

fn read_if_present(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read file");
            None
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = read_if_present(path)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed file");
            None
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("{} has no parent directory", path.display()))?;
    fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;

    let body = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
