//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use pitchdesk::{ResultRow, StorageManager};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// A state store in a fresh temp directory.
///
/// Keep the `TempDir` alive for as long as the store is used.
pub fn temp_storage() -> (TempDir, StorageManager) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = StorageManager::at(temp_dir.path().join("state"));
    (temp_dir, storage)
}

/// Row with only an id, a name and a subscriber count.
pub fn row(id: &str, subscribers: u64) -> ResultRow {
    ResultRow::new(id, format!("Channel {}", id), subscribers)
}

/// Row with a quality score set.
pub fn scored(id: &str, quality: f64) -> ResultRow {
    let mut r = row(id, 20_000);
    r.quality_score = Some(quality);
    r
}

/// Ids of rows, in order.
pub fn ids<'a>(rows: impl IntoIterator<Item = &'a ResultRow>) -> Vec<&'a str> {
    rows.into_iter().map(|r| r.influencer_id.as_str()).collect()
}
