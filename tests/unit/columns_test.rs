//! Unit tests for the column visibility profile

use std::fs;

use pitchdesk::columns::{mandatory_keys, ColumnProfile, COLUMN_STORAGE_KEY, DEFAULT_COLUMNS};
use pitchdesk::ColumnError;

use crate::helpers::temp_storage;

fn defaults() -> Vec<String> {
    DEFAULT_COLUMNS.iter().map(|k| k.to_string()).collect()
}

#[test]
fn load_without_saved_state_gives_defaults() {
    let (_temp, storage) = temp_storage();
    let profile = ColumnProfile::load(&storage);
    assert_eq!(profile.keys(), defaults().as_slice());
}

#[test]
fn malformed_saved_state_degrades_to_defaults() {
    let (_temp, storage) = temp_storage();
    storage.ensure_storage_dir().unwrap();
    fs::write(storage.key_path(COLUMN_STORAGE_KEY), "{not json").unwrap();

    let profile = ColumnProfile::load(&storage);
    assert_eq!(profile.keys(), defaults().as_slice());
}

#[test]
fn wrong_shape_saved_state_degrades_to_defaults() {
    let (_temp, storage) = temp_storage();
    storage.write(COLUMN_STORAGE_KEY, &serde_json::json!({"a": 1})).unwrap();

    let profile = ColumnProfile::load(&storage);
    assert_eq!(profile.keys(), defaults().as_slice());
}

#[test]
fn removing_a_mandatory_column_is_a_no_op() {
    let (_temp, storage) = temp_storage();
    let mut profile = ColumnProfile::load(&storage);

    for key in mandatory_keys() {
        let keys = profile.toggle(key, false).unwrap();
        assert!(keys.iter().any(|k| k == key), "{} was removed", key);
    }
    assert_eq!(profile.keys(), defaults().as_slice());
}

#[test]
fn adding_appends_once() {
    let (_temp, storage) = temp_storage();
    let mut profile = ColumnProfile::load(&storage);

    profile.toggle("sponsored_video_links", true).unwrap();
    profile.toggle("sponsored_video_links", true).unwrap();

    let keys = profile.keys();
    assert_eq!(keys.len(), DEFAULT_COLUMNS.len() + 1);
    assert_eq!(keys.last().map(String::as_str), Some("sponsored_video_links"));
}

#[test]
fn reload_reflects_last_toggle() {
    let (_temp, storage) = temp_storage();
    let mut profile = ColumnProfile::load(&storage);
    profile.toggle("estimated_cpm", false).unwrap();
    profile.toggle("median_views_last_10", true).unwrap();

    let reloaded = ColumnProfile::load(&storage);
    assert!(!reloaded.is_visible("estimated_cpm"));
    assert!(reloaded.is_visible("median_views_last_10"));
    assert_eq!(reloaded.keys(), profile.keys());
}

#[test]
fn reset_restores_and_persists_exact_defaults() {
    let (_temp, storage) = temp_storage();
    let mut profile = ColumnProfile::load(&storage);
    profile.toggle("suggested_price", false).unwrap();
    profile.toggle("long_videos_last_10", true).unwrap();
    assert!(!profile.is_visible("suggested_price"));

    let keys = profile.reset().unwrap().to_vec();
    assert_eq!(keys, defaults());
    assert!(profile.is_visible("suggested_price"));

    let persisted: Vec<String> = storage.read(COLUMN_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(persisted, defaults());
}

#[test]
fn unknown_column_is_rejected() {
    let (_temp, storage) = temp_storage();
    let mut profile = ColumnProfile::load(&storage);
    let err = profile.toggle("favourite_colour", true).unwrap_err();
    assert!(matches!(err, ColumnError::UnknownColumn(k) if k == "favourite_colour"));
    assert_eq!(profile.keys(), defaults().as_slice());
}

#[test]
fn saved_profile_missing_mandatory_columns_is_repaired() {
    let (_temp, storage) = temp_storage();
    storage
        .write(COLUMN_STORAGE_KEY, &vec!["estimated_cpm", "influencer"])
        .unwrap();

    let profile = ColumnProfile::load(&storage);
    assert_eq!(profile.keys()[0], "estimated_cpm");
    assert_eq!(profile.keys()[1], "influencer");
    for key in mandatory_keys() {
        assert!(profile.is_visible(key));
    }
}
