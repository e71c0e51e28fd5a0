//! Result rows produced by search and evaluate tasks.
//!
//! Rows are typed records with explicit optional metrics. They are
//! validated once, when they enter the crate through [`load_results`], and
//! are immutable afterwards.

mod field;
mod source;

pub use field::{NumericField, ParseFieldError};
pub use source::{load_results, parse_results, SourceError};

use serde::{Deserialize, Serialize};

use crate::tier::TierBucket;

/// One influencer's search or evaluation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub influencer_id: String,
    pub name: String,
    pub subscriber_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_url: Option<String>,

    // Evaluation metrics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_views_last_10: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsored_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos_last_3_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_views_last_10: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_videos_last_10: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_videos_last_10: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsored_avg_views: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsored_median_views: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsored_max_views: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsored_max_engagement: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsored_avg_views_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sponsored_video_links: Vec<String>,

    // Search metrics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_views: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_description: Option<String>,
}

impl ResultRow {
    /// Minimal row with only the required identity fields set.
    pub fn new(
        influencer_id: impl Into<String>,
        name: impl Into<String>,
        subscriber_count: u64,
    ) -> Self {
        Self {
            influencer_id: influencer_id.into(),
            name: name.into(),
            subscriber_count,
            country: None,
            channel_type: None,
            avatar_url: None,
            channel_url: None,
            quality_score: None,
            match_score: None,
            avg_views_last_10: None,
            engagement_rate: None,
            sponsored_count: None,
            estimated_cpm: None,
            suggested_price: None,
            videos_last_3_months: None,
            median_views_last_10: None,
            short_videos_last_10: None,
            long_videos_last_10: None,
            sponsored_avg_views: None,
            sponsored_median_views: None,
            sponsored_max_views: None,
            sponsored_max_engagement: None,
            sponsored_avg_views_ratio: None,
            sponsored_video_links: Vec::new(),
            video_count: None,
            total_views: None,
            avg_views: None,
            seo_keywords: None,
            channel_description: None,
        }
    }

    /// Audience tier derived from the subscriber count.
    pub fn tier(&self) -> TierBucket {
        TierBucket::classify(self.subscriber_count)
    }
}

/// Which kind of task produced a result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Search,
    #[default]
    Evaluate,
}

/// Channel-type requirements of an evaluate task, by priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelTypes {
    #[serde(default)]
    pub p0: Vec<String>,
    #[serde(default)]
    pub p1: Vec<String>,
    #[serde(default)]
    pub p2: Vec<String>,
}

impl ChannelTypes {
    pub fn is_empty(&self) -> bool {
        self.p0.is_empty() && self.p1.is_empty() && self.p2.is_empty()
    }
}

/// Metadata of the task a result set belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInfo {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: TaskKind,
    #[serde(default, alias = "channelTypes", skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<ChannelTypes>,
}

/// A validated batch of rows plus optional task metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub task: Option<TaskInfo>,
    pub results: Vec<ResultRow>,
}

impl ResultSet {
    /// Task kind, defaulting to `Evaluate` when no metadata was supplied.
    pub fn kind(&self) -> TaskKind {
        self.task.as_ref().map(|t| t.kind).unwrap_or_default()
    }

    /// Task display name, if any.
    pub fn task_name(&self) -> Option<&str> {
        self.task.as_ref().map(|t| t.name.as_str())
    }

    /// Find a row by influencer id.
    pub fn find(&self, influencer_id: &str) -> Option<&ResultRow> {
        self.results.iter().find(|r| r.influencer_id == influencer_id)
    }
}
