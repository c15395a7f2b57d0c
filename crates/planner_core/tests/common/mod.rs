#![allow(dead_code)]

use planner_core::{Planner, Record, StorageConfig};
use serde_json::Value;
use tempfile::TempDir;

/// Planner over a fresh temporary storage directory.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn temp_planner() -> (TempDir, Planner) {
    let dir = tempfile::tempdir().unwrap();
    let planner = Planner::open(&StorageConfig::in_dir(dir.path())).unwrap();
    (dir, planner)
}

pub fn parse(payload: &str) -> Value {
    serde_json::from_str(payload).unwrap()
}

pub fn parse_records(payload: &str) -> Vec<Record> {
    serde_json::from_str(payload).unwrap()
}
