//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub email_lookup: EmailLookupConfig,
}

impl Config {
    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), InvalidSetting> {
        if self.storage.directory.trim().is_empty() {
            return Err(InvalidSetting::new("storage", "directory", "must not be empty"));
        }
        if self.display.link_limit == 0 {
            return Err(InvalidSetting::new("display", "link_limit", "must be > 0"));
        }
        if self.display.page_size == 0 {
            return Err(InvalidSetting::new("display", "page_size", "must be > 0"));
        }
        let rate = self.email_lookup.hit_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(InvalidSetting::new(
                "email_lookup",
                "hit_rate",
                format!("{} must be between 0.0 and 1.0", rate),
            ));
        }
        if self.email_lookup.delay_ms > 60_000 {
            return Err(InvalidSetting::new(
                "email_lookup",
                "delay_ms",
                format!("{} exceeds maximum (60000)", self.email_lookup.delay_ms),
            ));
        }
        Ok(())
    }
}

/// A config value outside its allowed range, by TOML section and key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{section}] {key} {problem}")]
pub struct InvalidSetting {
    pub section: &'static str,
    pub key: &'static str,
    pub problem: String,
}

impl InvalidSetting {
    fn new(section: &'static str, key: &'static str, problem: impl Into<String>) -> Self {
        Self {
            section,
            key,
            problem: problem.into(),
        }
    }
}

/// Where persisted UI state (column profile, pitch list) lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
}

pub fn default_directory() -> String {
    "~/.pitchdesk".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

/// How multi-valued link columns are written to export files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkExport {
    /// Every link, one per line inside the cell.
    #[default]
    All,
    /// Same truncation as the on-screen table: first `link_limit` links
    /// plus a `+N 更多` suffix.
    Truncated,
}

/// Spreadsheet export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory export files are written to
    #[serde(default = "default_export_directory")]
    pub directory: String,
    #[serde(default)]
    pub links: LinkExport,
}

pub fn default_export_directory() -> String {
    ".".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            links: LinkExport::default(),
        }
    }
}

/// Terminal table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Links shown per cell before collapsing into "+N 更多"
    #[serde(default = "default_link_limit")]
    pub link_limit: usize,
    /// Rows per page in `results` output
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

pub fn default_link_limit() -> usize {
    2
}

pub fn default_page_size() -> usize {
    15
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            link_limit: default_link_limit(),
            page_size: default_page_size(),
        }
    }
}

/// Settings of the simulated e-mail discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailLookupConfig {
    /// Artificial latency per lookup batch
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Probability that a lookup finds an address
    #[serde(default = "default_hit_rate")]
    pub hit_rate: f64,
}

pub fn default_delay_ms() -> u64 {
    2000
}

pub fn default_hit_rate() -> f64 {
    0.7
}

impl Default for EmailLookupConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            hit_rate: default_hit_rate(),
        }
    }
}
