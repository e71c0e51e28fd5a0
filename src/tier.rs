//! Audience-size tiers derived from subscriber counts.
//!
//! Eight half-open, lower-inclusive buckets cover `[0, 10_000_000)`.
//! Counts at or above the top bound are not covered by any range and
//! currently fall back to [`TierBucket::Nano`].

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the classified range.
pub const CLASSIFIED_LIMIT: u64 = 10_000_000;

/// One of the eight ordered audience-size buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierBucket {
    #[serde(rename = "Nano")]
    Nano,
    #[serde(rename = "Micro")]
    Micro,
    #[serde(rename = "Micro+")]
    MicroPlus,
    #[serde(rename = "Mid")]
    Mid,
    #[serde(rename = "Mid+")]
    MidPlus,
    #[serde(rename = "Macro")]
    Macro,
    #[serde(rename = "Top")]
    Top,
    #[serde(rename = "Mega")]
    Mega,
}

impl TierBucket {
    /// All buckets, smallest audience first.
    pub const ALL: [TierBucket; 8] = [
        TierBucket::Nano,
        TierBucket::Micro,
        TierBucket::MicroPlus,
        TierBucket::Mid,
        TierBucket::MidPlus,
        TierBucket::Macro,
        TierBucket::Top,
        TierBucket::Mega,
    ];

    /// Classify a subscriber count.
    ///
    /// Total over all inputs. Counts `>= CLASSIFIED_LIMIT` match no range
    /// and return `Nano`.
    pub fn classify(count: u64) -> TierBucket {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|tier| tier.range().contains(&count))
            .unwrap_or(TierBucket::Nano)
    }

    /// The half-open subscriber range this bucket covers.
    pub fn range(self) -> Range<u64> {
        match self {
            TierBucket::Nano => 0..10_000,
            TierBucket::Micro => 10_000..50_000,
            TierBucket::MicroPlus => 50_000..100_000,
            TierBucket::Mid => 100_000..200_000,
            TierBucket::MidPlus => 200_000..500_000,
            TierBucket::Macro => 500_000..1_000_000,
            TierBucket::Top => 1_000_000..5_000_000,
            TierBucket::Mega => 5_000_000..CLASSIFIED_LIMIT,
        }
    }

    /// Short label shown in tables and exports.
    pub fn label(self) -> &'static str {
        match self {
            TierBucket::Nano => "Nano",
            TierBucket::Micro => "Micro",
            TierBucket::MicroPlus => "Micro+",
            TierBucket::Mid => "Mid",
            TierBucket::MidPlus => "Mid+",
            TierBucket::Macro => "Macro",
            TierBucket::Top => "Top",
            TierBucket::Mega => "Mega",
        }
    }

    /// Label with the human range, e.g. `Mid+ (200K-500K)`.
    pub fn describe(self) -> String {
        let range = self.range();
        format!(
            "{} ({}-{})",
            self.label(),
            compact_count(range.start),
            compact_count(range.end)
        )
    }
}

impl fmt::Display for TierBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a tier label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier '{0}' (expected one of: Nano, Micro, Micro+, Mid, Mid+, Macro, Top, Mega)")]
pub struct ParseTierError(pub String);

impl FromStr for TierBucket {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|tier| tier.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseTierError(s.to_string()))
    }
}

fn compact_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{}M", n / 1_000_000)
    } else if n >= 1_000 {
        format!("{}K", n / 1_000)
    } else {
        n.to_string()
    }
}
