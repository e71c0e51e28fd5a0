//! Unit tests for loading result files

use std::fs;

use tempfile::TempDir;

use pitchdesk::filter::{filter_rows, FacetState};
use pitchdesk::results::parse_results;
use pitchdesk::{load_results, SourceError, TaskKind, TierBucket};

use crate::helpers::{fixtures_dir, ids, load_fixture};

#[test]
fn evaluation_fixture_loads_with_task() {
    let set = load_results(&fixtures_dir().join("evaluation.json")).unwrap();
    let task = set.task.as_ref().unwrap();

    assert_eq!(task.name, "春季草坪推广");
    assert_eq!(set.kind(), TaskKind::Evaluate);
    let channel_types = task.channel_types.as_ref().unwrap();
    assert_eq!(channel_types.p0, vec!["Lawn Care".to_string()]);
    assert!(channel_types.p2.is_empty());
    assert_eq!(set.results.len(), 5);
}

#[test]
fn normalisation_uppercases_country_and_blanks_empty_type() {
    let set = parse_results(&load_fixture("evaluation.json")).unwrap();
    assert_eq!(set.find("UC_alpha").unwrap().country.as_deref(), Some("US"));
    assert_eq!(set.find("UC_delta").unwrap().channel_type, None);
    assert_eq!(set.find("UC_epsilon").unwrap().country, None);
}

#[test]
fn search_fixture_is_search_kind() {
    let set = parse_results(&load_fixture("search.json")).unwrap();
    assert_eq!(set.kind(), TaskKind::Search);
    assert_eq!(set.results[1].tier(), TierBucket::Macro);
    assert_eq!(set.results[0].total_views, Some(8_200_000));
}

#[test]
fn missing_file_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    let err = load_results(&temp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
}

#[test]
fn negative_metric_is_rejected() {
    let json = r#"[{"influencer_id": "a", "name": "A", "subscriber_count": 10, "quality_score": -3}]"#;
    let err = parse_results(json).unwrap_err();
    assert!(matches!(err, SourceError::InvalidMetric { ref id, .. } if id == "a"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"[
        {"influencer_id": "a", "name": "A", "subscriber_count": 10},
        {"influencer_id": " a ", "name": "A again", "subscriber_count": 20}
    ]"#;
    let err = parse_results(json).unwrap_err();
    assert!(matches!(err, SourceError::DuplicateId { ref id } if id == "a"));
}

#[test]
fn empty_name_is_rejected() {
    let err = parse_results(r#"[{"influencer_id": "a", "name": "  ", "subscriber_count": 10}]"#)
        .unwrap_err();
    assert!(matches!(err, SourceError::EmptyName { .. }));
}

#[test]
fn empty_file_list_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.json");
    fs::write(&path, "[]").unwrap();

    let set = load_results(&path).unwrap();
    assert!(set.results.is_empty());
    assert_eq!(set.kind(), TaskKind::Evaluate);
}

#[test]
fn rows_without_subscriber_count_never_reach_tier_filtering() {
    let json = r#"[
        {"influencer_id": "b", "name": "B", "subscriber_count": 5000},
        {"influencer_id": "a", "name": "A"}
    ]"#;
    let err = parse_results(json).unwrap_err();
    assert!(matches!(err, SourceError::MissingSubscriberCount { index: 1, ref id } if id == "a"));
    assert!(err.to_string().contains("subscriber_count"));

    let json = r#"[{"influencer_id": "b", "name": "B", "subscriber_count": 5000}]"#;
    let set = parse_results(json).unwrap();
    let nano = FacetState::new().with_tiers([TierBucket::Nano]);
    assert_eq!(ids(filter_rows(&set.results, &nano)), vec!["b"]);
}
