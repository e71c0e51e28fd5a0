//! Client-side filtering and ordering of loaded result rows.
//!
//! Filtering is a pure re-derivation from the current facet state and row
//! set: the same inputs always give the same rows in the same order.

mod facets;
mod range;
mod sort;

pub use facets::{apply, channel_type_options, country_options, filter_rows, FacetState};
pub use range::{ParseRangeError, RangeFilter};
pub use sort::{sort_rows, ParseSortError, SortDirection, SortKey};
