//! Single-field numeric range predicate.

use std::fmt;
use std::str::FromStr;

/// Condition of a numeric filter control.
///
/// A bound of `None` means the user has picked a condition but not entered
/// a value yet. Such a filter is inactive and matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum RangeFilter {
    #[default]
    None,
    GreaterThan(Option<f64>),
    LessThan(Option<f64>),
    /// Inclusive on both ends.
    Between(Option<f64>, Option<f64>),
}

impl RangeFilter {
    /// Whether the filter constrains anything.
    pub fn is_active(&self) -> bool {
        match self {
            RangeFilter::None => false,
            RangeFilter::GreaterThan(t) | RangeFilter::LessThan(t) => t.is_some(),
            RangeFilter::Between(lo, hi) => lo.is_some() && hi.is_some(),
        }
    }

    /// Evaluate the predicate against a value.
    ///
    /// `Between` with `lo > hi` matches nothing.
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            RangeFilter::GreaterThan(Some(t)) => value > t,
            RangeFilter::LessThan(Some(t)) => value < t,
            RangeFilter::Between(Some(lo), Some(hi)) => lo <= value && value <= hi,
            _ => true,
        }
    }

    /// Evaluate against a value that may be missing from the row.
    ///
    /// A missing value fails any active filter.
    pub fn matches_opt(&self, value: Option<f64>) -> bool {
        if !self.is_active() {
            return true;
        }
        value.is_some_and(|v| self.matches(v))
    }
}

impl fmt::Display for RangeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn bound(b: &Option<f64>) -> String {
            b.map(|v| v.to_string()).unwrap_or_default()
        }
        match self {
            RangeFilter::None => write!(f, "none"),
            RangeFilter::GreaterThan(t) => write!(f, "gt:{}", bound(t)),
            RangeFilter::LessThan(t) => write!(f, "lt:{}", bound(t)),
            RangeFilter::Between(lo, hi) => write!(f, "between:{}:{}", bound(lo), bound(hi)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRangeError {
    #[error("unknown condition '{0}' (expected none, gt, lt or between)")]
    UnknownCondition(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("'{0}' has too many parts")]
    TooManyParts(String),
}

/// Parses `none`, `gt:N`, `lt:N`, `between:LO:HI`.
///
/// Empty bounds are allowed and leave the filter inactive, e.g. `between:60:`.
impl FromStr for RangeFilter {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let condition = parts[0].trim().to_ascii_lowercase();

        let value_at = |i: usize| -> Result<Option<f64>, ParseRangeError> {
            match parts.get(i).map(|p| p.trim()) {
                None | Some("") => Ok(None),
                Some(raw) => raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(Some)
                    .ok_or_else(|| ParseRangeError::InvalidNumber(raw.to_string())),
            }
        };

        let max_parts = match condition.as_str() {
            "none" | "" => 1,
            "gt" | "lt" => 2,
            "between" => 3,
            _ => return Err(ParseRangeError::UnknownCondition(parts[0].to_string())),
        };
        if parts.len() > max_parts {
            return Err(ParseRangeError::TooManyParts(s.to_string()));
        }

        Ok(match condition.as_str() {
            "gt" => RangeFilter::GreaterThan(value_at(1)?),
            "lt" => RangeFilter::LessThan(value_at(1)?),
            "between" => RangeFilter::Between(value_at(1)?, value_at(2)?),
            _ => RangeFilter::None,
        })
    }
}
