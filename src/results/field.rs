//! Numeric metrics that can be filtered and sorted on.

use std::fmt;
use std::str::FromStr;

use super::ResultRow;

/// A numeric column of a [`ResultRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    SubscriberCount,
    QualityScore,
    MatchScore,
    AvgViewsLast10,
    EngagementRate,
    SponsoredCount,
    EstimatedCpm,
    SuggestedPrice,
    VideosLast3Months,
    MedianViewsLast10,
    ShortVideosLast10,
    LongVideosLast10,
    SponsoredAvgViews,
    SponsoredMedianViews,
    SponsoredMaxViews,
    SponsoredMaxEngagement,
    SponsoredAvgViewsRatio,
    VideoCount,
    TotalViews,
    AvgViews,
}

impl NumericField {
    pub const ALL: [NumericField; 20] = [
        NumericField::SubscriberCount,
        NumericField::QualityScore,
        NumericField::MatchScore,
        NumericField::AvgViewsLast10,
        NumericField::EngagementRate,
        NumericField::SponsoredCount,
        NumericField::EstimatedCpm,
        NumericField::SuggestedPrice,
        NumericField::VideosLast3Months,
        NumericField::MedianViewsLast10,
        NumericField::ShortVideosLast10,
        NumericField::LongVideosLast10,
        NumericField::SponsoredAvgViews,
        NumericField::SponsoredMedianViews,
        NumericField::SponsoredMaxViews,
        NumericField::SponsoredMaxEngagement,
        NumericField::SponsoredAvgViewsRatio,
        NumericField::VideoCount,
        NumericField::TotalViews,
        NumericField::AvgViews,
    ];

    /// Stable key, identical to the JSON field name.
    pub fn key(self) -> &'static str {
        match self {
            NumericField::SubscriberCount => "subscriber_count",
            NumericField::QualityScore => "quality_score",
            NumericField::MatchScore => "match_score",
            NumericField::AvgViewsLast10 => "avg_views_last_10",
            NumericField::EngagementRate => "engagement_rate",
            NumericField::SponsoredCount => "sponsored_count",
            NumericField::EstimatedCpm => "estimated_cpm",
            NumericField::SuggestedPrice => "suggested_price",
            NumericField::VideosLast3Months => "videos_last_3_months",
            NumericField::MedianViewsLast10 => "median_views_last_10",
            NumericField::ShortVideosLast10 => "short_videos_last_10",
            NumericField::LongVideosLast10 => "long_videos_last_10",
            NumericField::SponsoredAvgViews => "sponsored_avg_views",
            NumericField::SponsoredMedianViews => "sponsored_median_views",
            NumericField::SponsoredMaxViews => "sponsored_max_views",
            NumericField::SponsoredMaxEngagement => "sponsored_max_engagement",
            NumericField::SponsoredAvgViewsRatio => "sponsored_avg_views_ratio",
            NumericField::VideoCount => "video_count",
            NumericField::TotalViews => "total_views",
            NumericField::AvgViews => "avg_views",
        }
    }

    /// Read this metric from a row. `None` when the row does not carry it.
    pub fn value(self, row: &ResultRow) -> Option<f64> {
        match self {
            NumericField::SubscriberCount => Some(row.subscriber_count as f64),
            NumericField::QualityScore => row.quality_score,
            NumericField::MatchScore => row.match_score,
            NumericField::AvgViewsLast10 => row.avg_views_last_10,
            NumericField::EngagementRate => row.engagement_rate,
            NumericField::SponsoredCount => row.sponsored_count.map(f64::from),
            NumericField::EstimatedCpm => row.estimated_cpm,
            NumericField::SuggestedPrice => row.suggested_price,
            NumericField::VideosLast3Months => row.videos_last_3_months.map(f64::from),
            NumericField::MedianViewsLast10 => row.median_views_last_10,
            NumericField::ShortVideosLast10 => row.short_videos_last_10.map(f64::from),
            NumericField::LongVideosLast10 => row.long_videos_last_10.map(f64::from),
            NumericField::SponsoredAvgViews => row.sponsored_avg_views,
            NumericField::SponsoredMedianViews => row.sponsored_median_views,
            NumericField::SponsoredMaxViews => row.sponsored_max_views,
            NumericField::SponsoredMaxEngagement => row.sponsored_max_engagement,
            NumericField::SponsoredAvgViewsRatio => row.sponsored_avg_views_ratio,
            NumericField::VideoCount => row.video_count.map(|v| v as f64),
            NumericField::TotalViews => row.total_views.map(|v| v as f64),
            NumericField::AvgViews => row.avg_views,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown numeric field '{0}'")]
pub struct ParseFieldError(pub String);

impl FromStr for NumericField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.key() == wanted)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}
