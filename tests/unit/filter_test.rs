//! Unit tests for range filters, facet combination and sorting

use pitchdesk::filter::{
    apply, channel_type_options, country_options, filter_rows, sort_rows, FacetState,
    RangeFilter, SortKey,
};
use pitchdesk::results::parse_results;
use pitchdesk::{NumericField, TierBucket};

use crate::helpers::{ids, row, scored};

// ============================================================================
// Range filter
// ============================================================================

#[test]
fn none_matches_everything() {
    for v in [-1.0e9, -1.0, 0.0, 0.5, 42.0, 1.0e12] {
        assert!(RangeFilter::None.matches(v));
    }
}

#[test]
fn between_is_inclusive_on_both_ends() {
    let f = RangeFilter::Between(Some(60.0), Some(80.0));
    assert!(!f.matches(59.0));
    assert!(f.matches(60.0));
    assert!(f.matches(80.0));
    assert!(!f.matches(81.0));
}

#[test]
fn greater_and_less_are_strict() {
    assert!(!RangeFilter::GreaterThan(Some(10.0)).matches(10.0));
    assert!(RangeFilter::GreaterThan(Some(10.0)).matches(10.5));
    assert!(!RangeFilter::LessThan(Some(10.0)).matches(10.0));
    assert!(RangeFilter::LessThan(Some(10.0)).matches(9.5));
}

#[test]
fn absent_bounds_disable_the_filter() {
    let filters = [
        RangeFilter::GreaterThan(None),
        RangeFilter::LessThan(None),
        RangeFilter::Between(Some(60.0), None),
        RangeFilter::Between(None, Some(80.0)),
        RangeFilter::Between(None, None),
    ];
    for f in filters {
        assert!(!f.is_active(), "{}", f);
        assert!(f.matches(-5.0));
        assert!(f.matches(1.0e9));
    }
}

#[test]
fn inverted_between_matches_nothing() {
    let f = RangeFilter::Between(Some(80.0), Some(60.0));
    assert!(f.is_active());
    for v in [50.0, 60.0, 70.0, 80.0, 90.0] {
        assert!(!f.matches(v));
    }
}

#[test]
fn one_sided_between_parses_as_inactive() {
    let f: RangeFilter = "between:60:".parse().unwrap();
    assert_eq!(f, RangeFilter::Between(Some(60.0), None));
    assert!(!f.is_active());
}

// ============================================================================
// Facet combination
// ============================================================================

#[test]
fn tier_selection_keeps_original_order() {
    let rows = vec![row("a", 5_000), row("b", 75_000), row("c", 2_000_000)];
    let facets = FacetState::new().with_tiers([TierBucket::Nano, TierBucket::Top]);

    let kept = filter_rows(&rows, &facets);
    assert_eq!(ids(kept), vec!["a", "c"]);
}

#[test]
fn quality_between_keeps_bounds() {
    let rows = vec![
        scored("q55", 55.0),
        scored("q60", 60.0),
        scored("q80", 80.0),
        scored("q95", 95.0),
    ];
    let facets = FacetState::new().with_range(
        NumericField::QualityScore,
        RangeFilter::Between(Some(60.0), Some(80.0)),
    );

    assert_eq!(ids(filter_rows(&rows, &facets)), vec!["q60", "q80"]);
}

#[test]
fn inactive_facets_return_input_unchanged() {
    let rows = vec![row("a", 1), scored("b", 70.0), row("c", 3_000_000)];
    let facets = FacetState::new()
        .with_range(NumericField::QualityScore, RangeFilter::None)
        .with_range(NumericField::EstimatedCpm, RangeFilter::Between(Some(1.0), None));

    assert!(facets.is_inactive());
    assert_eq!(apply(&rows, &facets), rows);
}

#[test]
fn filtering_is_idempotent() {
    let mut rows: Vec<_> = (0..30).map(|i| scored(&format!("r{}", i), i as f64 * 3.5)).collect();
    rows[4].country = Some("US".to_string());
    rows[9].country = Some("US".to_string());
    rows[12].country = Some("GB".to_string());
    let facets = FacetState::new()
        .with_countries(["us", "GB"])
        .with_range(NumericField::QualityScore, RangeFilter::GreaterThan(Some(10.0)));

    let once = apply(&rows, &facets);
    let twice = apply(&once, &facets);
    assert_eq!(once, twice);
    assert_eq!(ids(&once), vec!["r4", "r9", "r12"]);
}

#[test]
fn missing_metric_fails_active_filter() {
    let rows = vec![row("no-score", 20_000), scored("scored", 70.0)];
    let facets =
        FacetState::new().with_range(NumericField::QualityScore, RangeFilter::LessThan(Some(90.0)));

    assert_eq!(ids(filter_rows(&rows, &facets)), vec!["scored"]);
}

#[test]
fn missing_country_never_matches_a_country_selection() {
    let mut us = row("us", 1);
    us.country = Some("US".to_string());
    let rows = vec![row("none", 1), us];
    let facets = FacetState::new().with_countries(["US"]);

    assert_eq!(ids(filter_rows(&rows, &facets)), vec!["us"]);
}

#[test]
fn category_selection_requires_a_type() {
    let mut diy = row("diy", 1);
    diy.channel_type = Some("DIY".to_string());
    let mut garden = row("garden", 1);
    garden.channel_type = Some("Gardening".to_string());
    let rows = vec![diy, row("untyped", 1), garden];
    let facets = FacetState::new().with_categories(["Gardening"]);

    assert_eq!(ids(filter_rows(&rows, &facets)), vec!["garden"]);
}

#[test]
fn selections_are_trimmed_like_loaded_rows() {
    let set = parse_results(
        r#"[
            {"influencer_id": "g", "name": "G", "subscriber_count": 1,
             "channel_type": " Gaming ", "country": " us"},
            {"influencer_id": "h", "name": "H", "subscriber_count": 1, "channel_type": "Cooking"}
        ]"#,
    )
    .unwrap();

    let facets = FacetState::new()
        .with_categories([" Gaming"])
        .with_countries(["US "]);
    assert_eq!(ids(filter_rows(&set.results, &facets)), vec!["g"]);
}

#[test]
fn facets_are_and_combined() {
    let mut a = scored("a", 85.0);
    a.country = Some("US".to_string());
    let mut b = scored("b", 85.0);
    b.country = Some("CA".to_string());
    let mut c = scored("c", 50.0);
    c.country = Some("US".to_string());
    let rows = vec![a, b, c];

    let facets = FacetState::new()
        .with_countries(["US"])
        .with_tiers([TierBucket::Micro])
        .with_range(NumericField::QualityScore, RangeFilter::GreaterThan(Some(80.0)));

    assert_eq!(ids(filter_rows(&rows, &facets)), vec!["a"]);
}

#[test]
fn options_are_distinct_and_sorted() {
    let mut rows = vec![row("a", 1), row("b", 1), row("c", 1), row("d", 1)];
    rows[0].country = Some("US".to_string());
    rows[1].country = Some("CA".to_string());
    rows[2].country = Some("US".to_string());
    rows[0].channel_type = Some("Tech".to_string());
    rows[3].channel_type = Some("Beauty".to_string());

    assert_eq!(country_options(&rows), vec!["CA", "US"]);
    assert_eq!(channel_type_options(&rows), vec!["Beauty", "Tech"]);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn sort_descending_puts_missing_last_and_is_stable() {
    let rows = vec![
        scored("low", 10.0),
        row("none-1", 1),
        scored("high-1", 90.0),
        scored("high-2", 90.0),
        row("none-2", 1),
    ];
    let mut view: Vec<_> = rows.iter().collect();
    sort_rows(&mut view, SortKey::descending(NumericField::QualityScore));

    assert_eq!(ids(view), vec!["high-1", "high-2", "low", "none-1", "none-2"]);
}

#[test]
fn sort_key_parses_direction() {
    let key: SortKey = "estimated_cpm:desc".parse().unwrap();
    assert_eq!(key, SortKey::descending(NumericField::EstimatedCpm));
    let key: SortKey = "match_score".parse().unwrap();
    assert_eq!(key, SortKey::ascending(NumericField::MatchScore));
    assert!("match_score:sideways".parse::<SortKey>().is_err());
    assert!("nope:asc".parse::<SortKey>().is_err());
}
