//! Export command handler

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

use pitchdesk::export::{export_sheet, project_evaluation, project_search, Sheet, SheetKind};
use pitchdesk::filter::{filter_rows, FacetState};
use pitchdesk::{Config, ExportOptions, ResultSet, TaskKind};

use super::{load_result_file, resolve_out_dir};

/// Build the sheet for the filtered rows of a result set.
pub fn build_sheet(set: &ResultSet, facets: &FacetState, options: &ExportOptions) -> Sheet {
    let rows = filter_rows(&set.results, facets);
    match set.kind() {
        TaskKind::Evaluate => Sheet::new(SheetKind::Evaluation, project_evaluation(&rows, options)),
        TaskKind::Search => Sheet::new(SheetKind::Search, project_search(&rows)),
    }
}

/// Export the filtered rows of a result file.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, facets: FacetState, out: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let set = load_result_file(file)?;
    let sheet = build_sheet(&set, &facets, &ExportOptions::from(&config));

    let dir = resolve_out_dir(out, &config);
    let today = Local::now().date_naive();
    let path = export_sheet(&sheet, &dir, set.task_name(), today).context("Export failed")?;

    println!(
        "Exported {} rows to {}",
        sheet.records.len(),
        path.display()
    );
    Ok(())
}
