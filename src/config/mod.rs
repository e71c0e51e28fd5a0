//! Configuration management for pitchdesk

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/pitchdesk/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/pitchdesk)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Expand ~ in the state directory path
    pub fn storage_directory(&self) -> PathBuf {
        expand_home(&self.storage.directory)
    }

    /// Expand ~ in the export directory path
    pub fn export_directory(&self) -> PathBuf {
        expand_home(&self.export.directory)
    }
}

fn expand_home(dir: &str) -> PathBuf {
    if let Some(stripped) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    Path::new(dir).to_path_buf()
}
