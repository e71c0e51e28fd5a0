//! File utilities: atomic writes and export file naming.

pub mod atomic;
pub mod filename;

pub use atomic::write_atomic;
pub use filename::{dated_file_name, export_file_name, sanitize_task_name, UNNAMED_TASK};
