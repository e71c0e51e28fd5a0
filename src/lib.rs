//! pitchdesk library
//!
//! Core of an influencer outreach console: load task results, narrow them
//! with facet filters, choose visible columns, export spreadsheets and keep
//! an outreach candidate list with e-mail discovery.

pub mod cli;
pub mod columns;
pub mod config;
pub mod country;
pub mod export;
pub mod files;
pub mod filter;
pub mod pitch;
pub mod results;
pub mod storage;
pub mod tier;
pub mod workspace;

pub use columns::{ColumnError, ColumnProfile};
pub use config::Config;
pub use export::{ExportError, ExportOptions, ExportRecord, Sheet, SheetKind};
pub use filter::{filter_rows, FacetState, RangeFilter, SortKey};
pub use pitch::{EmailLookup, EmailStatus, LookupOutcome, PitchCandidate, PitchList};
pub use results::{load_results, NumericField, ResultRow, ResultSet, SourceError, TaskKind};
pub use storage::{StorageError, StorageManager};
pub use tier::TierBucket;
pub use workspace::Workspace;
