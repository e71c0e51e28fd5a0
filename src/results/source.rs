//! Loading and validating result rows at the fetch boundary.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{NumericField, ResultRow, ResultSet, TaskInfo};

/// Errors raised while reading a result file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read results file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse results: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Row {index} has an empty influencer_id")]
    EmptyId { index: usize },

    #[error("Row '{id}' has an empty name")]
    EmptyName { id: String },

    #[error("Row {index} ('{id}') has no subscriber_count")]
    MissingSubscriberCount { index: usize, id: String },

    #[error("Duplicate influencer_id '{id}'")]
    DuplicateId { id: String },

    #[error("Row '{id}' has an invalid {field} value: {value}")]
    InvalidMetric {
        id: String,
        field: NumericField,
        value: f64,
    },
}

/// Accepted file shapes: a bare row array, or rows wrapped with task metadata.
///
/// Rows stay untyped until their required fields have been checked.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSource {
    Wrapped {
        #[serde(default)]
        task: Option<TaskInfo>,
        results: Vec<Value>,
    },
    Bare(Vec<Value>),
}

/// Load and validate a result file.
pub fn load_results(path: &Path) -> Result<ResultSet, SourceError> {
    let contents = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_results(&contents)?;
    debug!(
        path = %path.display(),
        rows = set.results.len(),
        "loaded result set"
    );
    Ok(set)
}

/// Parse and validate result JSON.
pub fn parse_results(json: &str) -> Result<ResultSet, SourceError> {
    let (task, rows) = match serde_json::from_str::<RawSource>(json)? {
        RawSource::Wrapped { task, results } => (task, results),
        RawSource::Bare(results) => (None, results),
    };

    let results = rows
        .into_iter()
        .enumerate()
        .map(|(index, raw)| typed_row(index, raw).map(normalize_row))
        .collect::<Result<Vec<_>, _>>()?;
    validate_rows(&results)?;

    Ok(ResultSet { task, results })
}

/// A row without a subscriber count cannot be tiered, so it is refused here
/// rather than defaulted.
fn typed_row(index: usize, raw: Value) -> Result<ResultRow, SourceError> {
    if raw.is_object() && raw.get("subscriber_count").map_or(true, Value::is_null) {
        let id = raw
            .get("influencer_id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string();
        return Err(SourceError::MissingSubscriberCount { index, id });
    }
    Ok(serde_json::from_value(raw)?)
}

fn normalize_row(mut row: ResultRow) -> ResultRow {
    row.influencer_id = row.influencer_id.trim().to_string();
    row.country = non_blank(row.country).map(|c| c.to_uppercase());
    row.channel_type = non_blank(row.channel_type);
    row.channel_url = non_blank(row.channel_url);
    row.avatar_url = non_blank(row.avatar_url);
    row
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_rows(rows: &[ResultRow]) -> Result<(), SourceError> {
    let mut seen = HashSet::new();

    for (index, row) in rows.iter().enumerate() {
        if row.influencer_id.is_empty() {
            return Err(SourceError::EmptyId { index });
        }
        if row.name.trim().is_empty() {
            return Err(SourceError::EmptyName {
                id: row.influencer_id.clone(),
            });
        }
        if !seen.insert(row.influencer_id.as_str()) {
            return Err(SourceError::DuplicateId {
                id: row.influencer_id.clone(),
            });
        }
        for field in NumericField::ALL {
            if let Some(value) = field.value(row) {
                if !value.is_finite() || value < 0.0 {
                    return Err(SourceError::InvalidMetric {
                        id: row.influencer_id.clone(),
                        field,
                        value,
                    });
                }
            }
        }
    }

    Ok(())
}
