//! Local record store.
//!
//! Every record is an independent JSON value kept in `<dir>/<name>.json`.
//! The public `load`/`save` pair never fails: a missing or unreadable record
//! yields the caller's default, and a failed write is dropped after being
//! logged. The fallible `try_*` variants are what the silent ones wrap.

use crate::errors::AppResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Logical record names, one file each.
pub mod records {
    pub const USER_GOAL: &str = "user_goal";
    pub const ACTIVITIES: &str = "activities";
    pub const TRAINING_PLAN: &str = "training_plan";
    pub const SCORE: &str = "score";
    pub const REDEEMED_REWARDS: &str = "redeemed_rewards";

    pub const ALL: [&str; 5] = [USER_GOAL, ACTIVITIES, TRAINING_PLAN, SCORE, REDEEMED_REWARDS];
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing the record `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Read and decode a record.
    pub fn try_load<T: DeserializeOwned>(&self, name: &str) -> AppResult<T> {
        let bytes = fs::read(self.path_for(name))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Encode and overwrite a record, creating the data directory if needed.
    pub fn try_save<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> AppResult<()> {
        let bytes = serde_json::to_vec(value)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(name), bytes)?;
        Ok(())
    }

    /// Load a record, falling back to `default` on any failure.
    pub fn load<T: DeserializeOwned>(&self, name: &str, default: T) -> T {
        match self.try_load(name) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("record '{}' not loaded, using default: {}", name, e);
                default
            }
        }
    }

    /// Save a record, ignoring any failure.
    pub fn save<T: Serialize + ?Sized>(&self, name: &str, value: &T) {
        if let Err(e) = self.try_save(name, value) {
            log::warn!("record '{}' not saved: {}", name, e);
        }
    }

    /// Delete a record file. A record that does not exist is already reset.
    pub fn reset(&self, name: &str) -> AppResult<bool> {
        match fs::remove_file(self.path_for(name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
