//! Pitch subcommands handler

use anyhow::{bail, Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

use pitchdesk::export::{export_sheet, format_percent, project_pitch, Sheet, SheetKind};
use pitchdesk::filter::{filter_rows, FacetState};
use pitchdesk::{Config, ResultRow, ResultSet, Workspace};

use super::{load_result_file, render_table, resolve_out_dir, should_proceed};

const MAX_CELL_WIDTH: usize = 40;

/// Rows of `set` selected by id, or every filtered row when `all` is set.
///
/// Unknown ids are an error so typos don't pass silently.
pub fn select_rows<'a>(
    set: &'a ResultSet,
    ids: &[String],
    all: bool,
    facets: &FacetState,
) -> Result<Vec<&'a ResultRow>> {
    if all {
        return Ok(filter_rows(&set.results, facets));
    }
    let mut rows = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();
    for id in ids {
        match set.find(id.trim().trim_start_matches('@')) {
            Some(row) => rows.push(row),
            None => missing.push(id.as_str()),
        }
    }
    if !missing.is_empty() {
        bail!("Unknown influencer id(s): {}", missing.join(", "));
    }
    Ok(rows)
}

/// Add rows from a result file to the outreach list.
#[cfg(not(tarpaulin_include))]
pub fn handle_add(file: &Path, ids: &[String], all: bool, facets: FacetState) -> Result<()> {
    let set = load_result_file(file)?;
    let rows = select_rows(&set, ids, all, &facets)?;
    let mut workspace = Workspace::open(Config::load()?)?;

    let selected = rows.len();
    let added = workspace.pitch_mut().add_rows(rows)?;
    let skipped = selected - added;

    if skipped > 0 {
        println!(
            "Added {} candidate(s), {} already on the list.",
            added, skipped
        );
    } else {
        println!("Added {} candidate(s).", added);
    }
    println!("Outreach list: {} total", workspace.pitch().len());
    Ok(())
}

/// Print the outreach list.
#[cfg(not(tarpaulin_include))]
pub fn handle_list() -> Result<()> {
    let workspace = Workspace::open(Config::load()?)?;
    let pitch = workspace.pitch();

    if pitch.is_empty() {
        println!("Outreach list is empty.");
        return Ok(());
    }

    let headers = ["ID", "频道名称", "订阅数", "互动率", "国家", "邮箱状态", "邮箱"];
    let body: Vec<Vec<String>> = pitch
        .candidates()
        .iter()
        .map(|c| {
            vec![
                c.influencer_id.clone(),
                c.name.clone(),
                c.subscriber_count.to_string(),
                format_percent(c.engagement_rate),
                c.country.clone().unwrap_or_else(|| "-".to_string()),
                c.email_status.to_string(),
                c.email.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    println!("Outreach list: {} candidate(s)", pitch.len());
    println!();
    print!("{}", render_table(&headers, &body, MAX_CELL_WIDTH));
    Ok(())
}

/// Remove one candidate.
#[cfg(not(tarpaulin_include))]
pub fn handle_remove(id: &str) -> Result<()> {
    let mut workspace = Workspace::open(Config::load()?)?;
    if workspace.pitch_mut().remove(id)? {
        println!("Removed '{}' from the outreach list.", id);
    } else {
        println!("'{}' is not on the outreach list.", id);
    }
    Ok(())
}

/// Empty the outreach list after confirmation.
#[cfg(not(tarpaulin_include))]
pub fn handle_clear(yes: bool) -> Result<()> {
    let mut workspace = Workspace::open(Config::load()?)?;
    let count = workspace.pitch().len();
    if count == 0 {
        println!("Outreach list is already empty.");
        return Ok(());
    }
    if !should_proceed(&format!("Remove all {} candidate(s)?", count), yes)? {
        println!("No changes made.");
        return Ok(());
    }
    let dropped = workspace.pitch_mut().clear()?;
    println!("Cleared {} candidate(s).", dropped);
    Ok(())
}

/// Resolve e-mails for every pending candidate.
#[cfg(not(tarpaulin_include))]
pub fn handle_lookup() -> Result<()> {
    let mut workspace = Workspace::open(Config::load()?)?;
    let pending = workspace.pitch().pending_ids().len();
    if pending == 0 {
        println!("No candidates waiting for an e-mail lookup.");
        return Ok(());
    }

    println!("Looking up e-mails for {} candidate(s)...", pending);
    let mut lookup = workspace.email_lookup();
    let summary = workspace.pitch_mut().resolve_pending(&mut lookup)?;
    println!(
        "Found {} of {} e-mail(s), {} not found.",
        summary.found, summary.attempted, summary.not_found
    );
    Ok(())
}

/// Export the outreach list.
#[cfg(not(tarpaulin_include))]
pub fn handle_export(out: Option<PathBuf>) -> Result<()> {
    let workspace = Workspace::open(Config::load()?)?;
    let sheet = Sheet::new(
        SheetKind::Pitch,
        project_pitch(workspace.pitch().candidates()),
    );
    let dir = resolve_out_dir(out, workspace.config());
    let today = Local::now().date_naive();
    let path = export_sheet(&sheet, &dir, None, today).context("Export failed")?;
    println!(
        "Exported {} candidate(s) to {}",
        sheet.records.len(),
        path.display()
    );
    Ok(())
}
