//! Column visibility profile for the evaluation table.
//!
//! The profile is an ordered list of column keys. Mandatory columns can
//! never be removed. The profile is persisted under
//! [`COLUMN_STORAGE_KEY`] on every change, so a reload always reflects the
//! last toggle.

use tracing::warn;

use crate::storage::{StorageError, StorageManager};

/// State key of the persisted profile.
pub const COLUMN_STORAGE_KEY: &str = "evaluate_column_config";

/// One displayable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnField {
    pub key: &'static str,
    pub label: &'static str,
    pub mandatory: bool,
}

const fn col(key: &'static str, label: &'static str, mandatory: bool) -> ColumnField {
    ColumnField {
        key,
        label,
        mandatory,
    }
}

/// Every column the evaluation table knows, in display order.
pub static ALL_COLUMNS: [ColumnField; 22] = [
    col("influencer", "红人", true),
    col("subscriber_tier", "粉丝量级", true),
    col("country", "国家", true),
    col("channel_type", "红人类型", false),
    col("is_candidate", "候选状态", false),
    col("quality_score", "红人质量评估", true),
    col("match_score", "红人业务匹配度", true),
    col("avg_views_last_10", "近10条均播", true),
    col("engagement_rate", "互动率", true),
    col("sponsored_count", "商单数量", false),
    col("estimated_cpm", "预估CPM", false),
    col("suggested_price", "建议报价", false),
    col("videos_last_3_months", "近3个月发布视频数", false),
    col("median_views_last_10", "近10条播放中位数", false),
    col("short_videos_last_10", "近10条短视频数量", false),
    col("long_videos_last_10", "近10条长视频数量", false),
    col("sponsored_avg_views", "商单均播", false),
    col("sponsored_median_views", "商单中位数", false),
    col("sponsored_max_views", "商单最高观看量", false),
    col("sponsored_max_engagement", "商单最高互动率", false),
    col("sponsored_avg_views_ratio", "商单均播占比", false),
    col("sponsored_video_links", "商单视频链接", false),
];

/// Columns shown when nothing has been persisted.
pub const DEFAULT_COLUMNS: [&str; 12] = [
    "influencer",
    "subscriber_tier",
    "country",
    "channel_type",
    "is_candidate",
    "quality_score",
    "match_score",
    "avg_views_last_10",
    "engagement_rate",
    "sponsored_count",
    "estimated_cpm",
    "suggested_price",
];

/// Look up a column by key.
pub fn column(key: &str) -> Option<&'static ColumnField> {
    ALL_COLUMNS.iter().find(|c| c.key == key)
}

/// Keys that every profile must contain.
pub fn mandatory_keys() -> impl Iterator<Item = &'static str> {
    ALL_COLUMNS.iter().filter(|c| c.mandatory).map(|c| c.key)
}

#[derive(Debug, thiserror::Error)]
pub enum ColumnError {
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The user's persisted choice of visible columns.
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    storage: StorageManager,
    keys: Vec<String>,
}

impl ColumnProfile {
    /// The hardcoded default key list.
    pub fn default_keys() -> Vec<String> {
        DEFAULT_COLUMNS.iter().map(|k| k.to_string()).collect()
    }

    /// Load the persisted profile, falling back to the default.
    ///
    /// Missing, unreadable or malformed state never surfaces as an error.
    pub fn load(storage: &StorageManager) -> Self {
        let keys = match storage.read::<Vec<String>>(COLUMN_STORAGE_KEY) {
            Ok(Some(keys)) => sanitize(keys),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "ignoring saved column config");
                None
            }
        };

        Self {
            storage: storage.clone(),
            keys: keys.unwrap_or_else(Self::default_keys),
        }
    }

    /// Visible keys, in order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Visible columns, in order.
    pub fn columns(&self) -> Vec<&'static ColumnField> {
        self.keys.iter().filter_map(|k| column(k)).collect()
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Include or exclude a column and persist the result.
    ///
    /// Adding appends when absent. Excluding a mandatory column is a no-op.
    pub fn toggle(&mut self, key: &str, included: bool) -> Result<&[String], ColumnError> {
        let field = column(key).ok_or_else(|| ColumnError::UnknownColumn(key.to_string()))?;

        if included {
            if !self.is_visible(key) {
                self.keys.push(key.to_string());
            }
        } else if !field.mandatory {
            self.keys.retain(|k| k != key);
        }

        self.storage.write(COLUMN_STORAGE_KEY, &self.keys)?;
        Ok(&self.keys)
    }

    /// Restore and persist the default profile.
    pub fn reset(&mut self) -> Result<&[String], ColumnError> {
        self.keys = Self::default_keys();
        self.storage.write(COLUMN_STORAGE_KEY, &self.keys)?;
        Ok(&self.keys)
    }
}

/// Drop unknown and repeated keys and re-add missing mandatory ones.
///
/// Returns `None` when nothing usable is left.
fn sanitize(saved: Vec<String>) -> Option<Vec<String>> {
    let mut keys: Vec<String> = Vec::with_capacity(saved.len());
    for key in saved {
        if column(&key).is_some() && !keys.contains(&key) {
            keys.push(key);
        } else {
            warn!(key = %key, "dropping unknown or repeated column from saved config");
        }
    }
    if keys.is_empty() {
        return None;
    }
    for key in mandatory_keys() {
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    Some(keys)
}
