//! Spreadsheet export.
//!
//! Rows are projected to flat records with fixed, labelled fields. The
//! projection ignores the column profile: an export always carries the full
//! field set. Sheets are written as UTF-8 CSV with a byte-order mark so
//! spreadsheet applications pick the right encoding for Chinese headers.

mod csv;
mod project;

pub use csv::{render_csv, write_csv, BOM};
pub use project::{
    format_currency, format_percent, format_ratio, project_evaluation, project_pitch,
    project_search, search_keywords, EVALUATION_HEADERS, PITCH_HEADERS, SEARCH_HEADERS,
};

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::config::{Config, LinkExport};
use crate::files::{dated_file_name, export_file_name};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    #[error("Failed to write export {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Options that shape the exported values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub links: LinkExport,
    /// Links kept when `links` is [`LinkExport::Truncated`].
    pub link_limit: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            links: LinkExport::All,
            link_limit: 2,
        }
    }
}

impl From<&Config> for ExportOptions {
    fn from(config: &Config) -> Self {
        Self {
            links: config.export.links,
            link_limit: config.display.link_limit,
        }
    }
}

/// One projected row: `(header, value)` pairs in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRecord {
    fields: Vec<(&'static str, String)>,
}

impl ExportRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &'static str, value: impl Into<String>) {
        self.fields.push((label, value.into()));
    }

    /// Value under a header label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(l, _)| *l)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Which export a sheet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Evaluation,
    Search,
    Pitch,
}

impl SheetKind {
    /// Sheet name, also used as the file name prefix.
    pub fn name(self) -> &'static str {
        match self {
            SheetKind::Evaluation => "评估结果",
            SheetKind::Search => "搜索结果",
            SheetKind::Pitch => "联络列表",
        }
    }

    pub fn headers(self) -> &'static [&'static str] {
        match self {
            SheetKind::Evaluation => &EVALUATION_HEADERS,
            SheetKind::Search => &SEARCH_HEADERS,
            SheetKind::Pitch => &PITCH_HEADERS,
        }
    }
}

/// A header row plus projected records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub kind: SheetKind,
    pub records: Vec<ExportRecord>,
}

impl Sheet {
    pub fn new(kind: SheetKind, records: Vec<ExportRecord>) -> Self {
        Self { kind, records }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.kind.headers()
    }

    /// File name for this sheet on `date`. The outreach list is not tied
    /// to a task and carries no task part.
    pub fn file_name(&self, task_name: Option<&str>, date: NaiveDate) -> String {
        match self.kind {
            SheetKind::Pitch => dated_file_name(self.kind.name(), date),
            _ => export_file_name(self.kind.name(), task_name, date),
        }
    }
}

/// Write `sheet` into `dir` under its dated file name.
///
/// Returns the path of the written file. The target is only created once
/// the whole sheet has been written.
pub fn export_sheet(
    sheet: &Sheet,
    dir: &Path,
    task_name: Option<&str>,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    if !dir.is_dir() {
        return Err(ExportError::MissingDirectory(dir.to_path_buf()));
    }
    let path = dir.join(sheet.file_name(task_name, date));
    write_csv(&path, sheet)?;
    info!(
        path = %path.display(),
        rows = sheet.records.len(),
        sheet = sheet.kind.name(),
        "exported sheet"
    );
    Ok(path)
}
