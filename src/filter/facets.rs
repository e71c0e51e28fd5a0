//! Multi-facet row filtering.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use super::RangeFilter;
use crate::results::{NumericField, ResultRow};
use crate::tier::TierBucket;

/// The complete filter state of one result view.
///
/// Every facet is ANDed. An empty selection set places no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetState {
    pub numeric: Vec<(NumericField, RangeFilter)>,
    pub tiers: HashSet<TierBucket>,
    pub countries: HashSet<String>,
    pub categories: HashSet<String>,
}

impl FacetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the numeric filter bound to `field`.
    pub fn with_range(mut self, field: NumericField, filter: RangeFilter) -> Self {
        self.set_range(field, filter);
        self
    }

    pub fn set_range(&mut self, field: NumericField, filter: RangeFilter) {
        match self.numeric.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = filter,
            None => self.numeric.push((field, filter)),
        }
    }

    pub fn with_tiers(mut self, tiers: impl IntoIterator<Item = TierBucket>) -> Self {
        self.tiers.extend(tiers);
        self
    }

    pub fn with_countries<S: Into<String>>(mut self, countries: impl IntoIterator<Item = S>) -> Self {
        self.countries
            .extend(countries.into_iter().map(|c| c.into().trim().to_uppercase()));
        self
    }

    pub fn with_categories<S: Into<String>>(
        mut self,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categories
            .extend(categories.into_iter().map(|c| c.into().trim().to_string()));
        self
    }

    /// True when no facet constrains the rows.
    pub fn is_inactive(&self) -> bool {
        self.numeric.iter().all(|(_, f)| !f.is_active())
            && self.tiers.is_empty()
            && self.countries.is_empty()
            && self.categories.is_empty()
    }

    /// Whether a single row passes every facet.
    pub fn accepts(&self, row: &ResultRow) -> bool {
        if !self
            .numeric
            .iter()
            .all(|(field, filter)| filter.matches_opt(field.value(row)))
        {
            return false;
        }

        if !self.tiers.is_empty() && !self.tiers.contains(&row.tier()) {
            return false;
        }

        if !self.countries.is_empty() {
            match &row.country {
                Some(country) if self.countries.contains(country) => {}
                _ => return false,
            }
        }

        if !self.categories.is_empty() {
            match &row.channel_type {
                Some(category) if self.categories.contains(category) => {}
                _ => return false,
            }
        }

        true
    }
}

/// Rows that pass every facet, in their original order.
pub fn filter_rows<'a>(rows: &'a [ResultRow], facets: &FacetState) -> Vec<&'a ResultRow> {
    let kept: Vec<&ResultRow> = rows.iter().filter(|row| facets.accepts(row)).collect();
    debug!(total = rows.len(), kept = kept.len(), "filtered rows");
    kept
}

/// Owned variant of [`filter_rows`].
pub fn apply(rows: &[ResultRow], facets: &FacetState) -> Vec<ResultRow> {
    filter_rows(rows, facets).into_iter().cloned().collect()
}

/// Distinct country codes present in `rows`, sorted.
pub fn country_options(rows: &[ResultRow]) -> Vec<String> {
    rows.iter()
        .filter_map(|r| r.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct channel types present in `rows`, sorted.
pub fn channel_type_options(rows: &[ResultRow]) -> Vec<String> {
    rows.iter()
        .filter_map(|r| r.channel_type.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
