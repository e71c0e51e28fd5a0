//! Outreach ("pitch") candidate list.
//!
//! Candidates are result rows promoted from an evaluation view. Each one
//! carries the state of its contact e-mail discovery. The list is
//! deduplicated by influencer id and persisted on every change.

mod list;
mod lookup;

pub use list::{LookupSummary, PitchList, PITCH_STORAGE_KEY};
pub use lookup::{guess_email, EmailLookup, LookupOutcome, SimulatedLookup};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::results::ResultRow;

/// Progress of the e-mail discovery for one candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    #[default]
    Idle,
    Loading,
    Found,
    NotFound,
}

impl EmailStatus {
    /// Whether a lookup still has to run.
    pub fn is_pending(self) -> bool {
        matches!(self, EmailStatus::Idle | EmailStatus::Loading)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EmailStatus::Idle => "idle",
            EmailStatus::Loading => "loading",
            EmailStatus::Found => "found",
            EmailStatus::NotFound => "not_found",
        }
    }
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An influencer on the outreach list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchCandidate {
    pub influencer_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub subscriber_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, alias = "emailStatus")]
    pub email_status: EmailStatus,
}

impl From<&ResultRow> for PitchCandidate {
    fn from(row: &ResultRow) -> Self {
        Self {
            influencer_id: row.influencer_id.clone(),
            name: row.name.clone(),
            avatar_url: row.avatar_url.clone(),
            subscriber_count: row.subscriber_count,
            country: row.country.clone(),
            channel_url: row.channel_url.clone(),
            estimated_cpm: row.estimated_cpm,
            suggested_price: row.suggested_price,
            engagement_rate: row.engagement_rate,
            channel_type: row.channel_type.clone(),
            email: None,
            email_status: EmailStatus::Idle,
        }
    }
}

/// A partial update to a candidate's e-mail state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailUpdate {
    pub status: EmailStatus,
    pub email: Option<String>,
}

impl EmailUpdate {
    pub fn loading() -> Self {
        Self {
            status: EmailStatus::Loading,
            email: None,
        }
    }
}

impl From<LookupOutcome> for EmailUpdate {
    fn from(outcome: LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Found(email) => Self {
                status: EmailStatus::Found,
                email: Some(email),
            },
            LookupOutcome::NotFound => Self {
                status: EmailStatus::NotFound,
                email: None,
            },
        }
    }
}
