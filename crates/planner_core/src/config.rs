//! Storage location configuration.
//!
//! # Invariants
//! - Each collection has its own file; the three paths are independent.
//! - Relative paths resolve against the process working directory.

use std::path::{Path, PathBuf};

pub const DEFAULT_STORAGE_DIR: &str = "db";
pub const USERS_FILE_NAME: &str = "users.json";
pub const TEAMS_FILE_NAME: &str = "teams.json";
pub const TASKS_FILE_NAME: &str = "boards.json";

/// File locations for the user, team and task collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub users_path: PathBuf,
    pub teams_path: PathBuf,
    pub tasks_path: PathBuf,
}

impl StorageConfig {
    /// Places the three default file names under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            users_path: dir.join(USERS_FILE_NAME),
            teams_path: dir.join(TEAMS_FILE_NAME),
            tasks_path: dir.join(TASKS_FILE_NAME),
        }
    }
}

impl Default for StorageConfig {
    /// `db/users.json`, `db/teams.json`, `db/boards.json`.
    fn default() -> Self {
        Self::in_dir(DEFAULT_STORAGE_DIR)
    }
}
