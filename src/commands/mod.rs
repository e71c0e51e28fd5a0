//! Command handlers for the pitchdesk CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod columns;
pub mod completions;
pub mod config;
pub mod export;
pub mod pitch;
pub mod results;
pub mod status;

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use pitchdesk::{load_results, Config, ResultSet};

/// Truncate a string to a maximum display width, adding ellipsis if needed.
///
/// Width is measured in terminal columns, so CJK characters count double.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let (budget, ellipsis) = if max_width > 3 {
        (max_width - 3, "...")
    } else {
        (max_width, "")
    };

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(ellipsis);
    out
}

/// Pad with spaces on the right up to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

/// Render rows as a `|`-separated table with a dashed header rule.
///
/// Cells are cut to `max_cell` columns. Newlines inside cells are shown as
/// spaces.
pub fn render_table(headers: &[&str], rows: &[Vec<String>], max_cell: usize) -> String {
    let clean = |s: &str| truncate_string(&s.replace('\n', " "), max_cell);
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|c| clean(c)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.width())
                .chain(std::iter::once(clean(h).width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    let line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad_to_width(c, *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    output.push_str(&line(headers.iter().map(|h| clean(h)).collect()));
    output.push('\n');
    output.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    output.push('\n');
    for row in body {
        output.push_str(&line(row));
        output.push('\n');
    }
    output
}

/// Load a result file, with the path in the error message.
pub fn load_result_file(path: &Path) -> Result<ResultSet> {
    load_results(path).with_context(|| format!("Failed to load results from {}", path.display()))
}

/// Export target: `--out` when given, else the configured directory.
pub fn resolve_out_dir(out: Option<PathBuf>, config: &Config) -> PathBuf {
    out.unwrap_or_else(|| config.export_directory())
}

/// Ask a yes/no question on stdin. Anything but y/yes declines.
pub fn should_proceed(prompt: &str, auto_confirm: bool) -> Result<bool> {
    if auto_confirm {
        return Ok(true);
    }
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
