//! Status command handler

use anyhow::Result;

use pitchdesk::{Config, Workspace};

/// Show the state directory, its files and the list sizes.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let workspace = Workspace::open(Config::load()?)?;
    let stats = workspace.storage().stats()?;

    println!("State directory: {}", stats.directory.display());
    if stats.keys.is_empty() {
        println!("   Stored keys: none");
    } else {
        println!(
            "   Stored keys: {} ({} bytes)",
            stats.keys.join(", "),
            stats.total_size
        );
    }
    println!(
        "   Visible columns: {}",
        workspace.columns().keys().len()
    );
    println!(
        "   Outreach list: {} candidate(s), {} pending lookup",
        workspace.pitch().len(),
        workspace.pitch().pending_ids().len()
    );
    Ok(())
}
