//! Columns subcommands handler

use anyhow::Result;

use pitchdesk::columns::ALL_COLUMNS;
use pitchdesk::{Config, Workspace};

/// List every known column and mark the visible ones.
#[cfg(not(tarpaulin_include))]
pub fn handle_list() -> Result<()> {
    let workspace = Workspace::open(Config::load()?)?;
    let profile = workspace.columns();

    println!("Visible columns are marked with *");
    println!();
    for column in ALL_COLUMNS.iter() {
        let mark = if profile.is_visible(column.key) { "*" } else { " " };
        let required = if column.mandatory { " (required)" } else { "" };
        println!(
            "  {} {:<28} {}{}",
            mark, column.key, column.label, required
        );
    }
    Ok(())
}

/// Show or hide one column.
#[cfg(not(tarpaulin_include))]
pub fn handle_toggle(key: &str, included: bool) -> Result<()> {
    let mut workspace = Workspace::open(Config::load()?)?;
    let was_visible = workspace.columns().is_visible(key);
    let keys = workspace.columns_mut().toggle(key, included)?.to_vec();

    let now_visible = keys.iter().any(|k| k == key);
    match (included, was_visible, now_visible) {
        (true, false, _) => println!("Column '{}' added.", key),
        (true, true, _) => println!("Column '{}' is already shown.", key),
        (false, _, true) => println!("Column '{}' is required and stays visible.", key),
        (false, true, false) => println!("Column '{}' removed.", key),
        (false, false, false) => println!("Column '{}' was not shown.", key),
    }
    println!("Columns: {}", keys.join(", "));
    Ok(())
}

/// Restore the default column profile.
#[cfg(not(tarpaulin_include))]
pub fn handle_reset() -> Result<()> {
    let mut workspace = Workspace::open(Config::load()?)?;
    let keys = workspace.columns_mut().reset()?;
    println!("Columns reset to defaults: {}", keys.join(", "));
    Ok(())
}
