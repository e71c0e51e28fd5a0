//! Unit tests for the state store and workspace

use std::fs;

use pitchdesk::columns::COLUMN_STORAGE_KEY;
use pitchdesk::pitch::PITCH_STORAGE_KEY;
use pitchdesk::{Config, StorageError, StorageManager, Workspace};

use crate::helpers::{row, temp_storage};

#[test]
fn read_missing_key_is_none() {
    let (_temp, storage) = temp_storage();
    let value: Option<Vec<String>> = storage.read("nothing-here").unwrap();
    assert!(value.is_none());
}

#[test]
fn write_then_read() {
    let (_temp, storage) = temp_storage();
    storage.write("numbers", &vec![1, 2, 3]).unwrap();
    let value: Option<Vec<i32>> = storage.read("numbers").unwrap();
    assert_eq!(value, Some(vec![1, 2, 3]));
    assert!(!storage.key_path("numbers").with_extension("json.tmp").exists());
}

#[test]
fn malformed_key_reports_which_key() {
    let (_temp, storage) = temp_storage();
    storage.ensure_storage_dir().unwrap();
    fs::write(storage.key_path("broken"), "nope").unwrap();

    let err = storage.read::<Vec<String>>("broken").unwrap_err();
    assert!(matches!(err, StorageError::Malformed { ref key, .. } if key == "broken"));
}

#[test]
fn remove_and_stats() {
    let (_temp, storage) = temp_storage();
    storage.write("b", &"x").unwrap();
    storage.write("a", &"y").unwrap();

    let stats = storage.stats().unwrap();
    assert_eq!(stats.keys, vec!["a".to_string(), "b".to_string()]);
    assert!(stats.total_size > 0);

    assert!(storage.remove("a").unwrap());
    assert!(!storage.remove("a").unwrap());
    assert_eq!(storage.stats().unwrap().keys, vec!["b".to_string()]);
}

#[test]
fn stats_on_missing_directory_is_empty() {
    let (temp, _) = temp_storage();
    let storage = StorageManager::at(temp.path().join("never-created"));
    assert!(storage.stats().unwrap().keys.is_empty());
}

#[test]
fn workspace_open_creates_directory_and_shares_state() {
    let (temp, _) = temp_storage();
    let dir = temp.path().join("ws");
    let mut config = Config::default();
    config.storage.directory = dir.to_string_lossy().to_string();

    let mut workspace = Workspace::open(config.clone()).unwrap();
    assert!(dir.is_dir());

    workspace.columns_mut().toggle("estimated_cpm", false).unwrap();
    workspace.pitch_mut().add_rows([&row("a", 1)]).unwrap();

    let stats = workspace.storage().stats().unwrap();
    assert!(stats.keys.contains(&COLUMN_STORAGE_KEY.to_string()));
    assert!(stats.keys.contains(&PITCH_STORAGE_KEY.to_string()));

    let reopened = Workspace::open(config).unwrap();
    assert!(!reopened.columns().is_visible("estimated_cpm"));
    assert!(reopened.pitch().contains("a"));
}
