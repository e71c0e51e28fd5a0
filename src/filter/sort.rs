//! Table ordering, applied after filtering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::results::{NumericField, ParseFieldError, ResultRow};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Column and direction of a table sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: NumericField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(field: NumericField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: NumericField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{}:{}", self.field, dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSortError {
    #[error(transparent)]
    Field(#[from] ParseFieldError),
    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    Direction(String),
}

/// Parses `field`, `field:asc` or `field:desc`.
impl FromStr for SortKey {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, dir) = match s.split_once(':') {
            Some((field, dir)) => (field, Some(dir)),
            None => (s, None),
        };
        let field: NumericField = field.parse()?;
        let direction = match dir.map(|d| d.trim().to_ascii_lowercase()).as_deref() {
            None | Some("asc") => SortDirection::Ascending,
            Some("desc") => SortDirection::Descending,
            Some(other) => return Err(ParseSortError::Direction(other.to_string())),
        };
        Ok(Self { field, direction })
    }
}

/// Stable sort by a numeric field. Rows without the value go last in
/// either direction.
pub fn sort_rows(rows: &mut [&ResultRow], key: SortKey) {
    rows.sort_by(|a, b| {
        match (key.field.value(a), key.field.value(b)) {
            (Some(x), Some(y)) => {
                let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
                match key.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
