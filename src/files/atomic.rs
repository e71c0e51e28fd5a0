//! Crash-safe file replacement.
//!
//! Content is written to a sibling temp file and renamed over the target, so
//! readers see either the old file or the complete new one.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Get the temp path used while replacing `path`.
///
/// The temp path is the original path with `.tmp` appended.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Atomically replace `path` with `contents`.
///
/// On failure the temp file is removed and `path` is left untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(path);

    let result = (|| {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)
    })();

    if result.is_err() {
        // Best-effort cleanup
        let _ = fs::remove_file(&temp_path);
    }
    result
}
