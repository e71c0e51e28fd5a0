//! Export file naming.
//!
//! Names follow `{prefix}_{task}_{YYYY-MM-DD}.csv`. Task names come from
//! user input, so they are sanitized to be safe on common filesystems while
//! keeping non-ASCII text (task names are usually Chinese).

use chrono::NaiveDate;

/// Task label used when a result set carries no task name.
pub const UNNAMED_TASK: &str = "未命名";

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Longest task component kept, in characters.
const MAX_TASK_CHARS: usize = 80;

/// Make a task name usable inside a filename.
///
/// Invalid characters and control characters are replaced with `_`,
/// whitespace runs collapse to a single space, leading/trailing dots and
/// spaces are trimmed. An empty result falls back to [`UNNAMED_TASK`].
pub fn sanitize_task_name(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut last_was_space = false;

    for c in input.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
            continue;
        }
        last_was_space = false;
        if INVALID_CHARS.contains(&c) || c.is_control() {
            result.push('_');
        } else {
            result.push(c);
        }
    }

    let trimmed: String = result
        .trim_matches(|c: char| c == '.' || c == ' ')
        .chars()
        .take(MAX_TASK_CHARS)
        .collect();

    if trimmed.is_empty() {
        return UNNAMED_TASK.to_string();
    }
    if WINDOWS_RESERVED
        .iter()
        .any(|r| r.eq_ignore_ascii_case(&trimmed))
    {
        return format!("_{}", trimmed);
    }
    trimmed
}

/// `{prefix}_{YYYY-MM-DD}.csv`, for exports not tied to a task.
pub fn dated_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

/// Build the export file name for a task's sheet.
pub fn export_file_name(prefix: &str, task_name: Option<&str>, date: NaiveDate) -> String {
    let task = task_name
        .map(sanitize_task_name)
        .unwrap_or_else(|| UNNAMED_TASK.to_string());
    format!("{}_{}_{}.csv", prefix, task, date.format("%Y-%m-%d"))
}
