//! Persisted UI state, stored as one JSON file per key.
//!
//! Stands in for the browser's local storage: `evaluate_column_config`
//! holds the column profile and `pitch-storage` the candidate list. Every
//! write replaces the whole file atomically.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::files::write_atomic;

/// Errors from reading or writing a state key.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to access state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("State key '{key}' holds malformed JSON: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize state key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Overview of what is currently persisted.
#[derive(Debug, Clone)]
pub struct StorageStats {
    pub directory: PathBuf,
    pub keys: Vec<String>,
    pub total_size: u64,
}

/// Key/value store for UI state under the configured directory.
#[derive(Debug, Clone)]
pub struct StorageManager {
    dir: PathBuf,
}

impl StorageManager {
    /// Create a storage manager for the directory named in `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            dir: config.storage_directory(),
        }
    }

    /// Create a storage manager rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the storage directory path
    pub fn storage_dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Ensure the storage directory exists
    pub fn ensure_storage_dir(&self) -> Result<PathBuf, StorageError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
                path: self.dir.clone(),
                source,
            })?;
        }
        Ok(self.dir.clone())
    }

    /// File backing a key.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read a key. `Ok(None)` when nothing has been stored yet.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.key_path(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                key: key.to_string(),
                source,
            })
    }

    /// Write a key, replacing any previous value.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        self.ensure_storage_dir()?;
        let json = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        let path = self.key_path(key);
        write_atomic(&path, &json).map_err(|source| StorageError::Io { path, source })?;
        debug!(key, bytes = json.len(), "persisted state");
        Ok(())
    }

    /// Delete a key. Returns whether anything was removed.
    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    /// List stored keys and their total size.
    pub fn stats(&self) -> Result<StorageStats, StorageError> {
        let mut keys = Vec::new();
        let mut total_size = 0u64;

        if self.dir.exists() {
            let entries = fs::read_dir(&self.dir).map_err(|source| StorageError::Io {
                path: self.dir.clone(),
                source,
            })?;
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        keys.push(stem.to_string());
                    }
                    total_size += entry.metadata().map(|m| m.len()).unwrap_or(0);
                }
            }
        }
        keys.sort();

        Ok(StorageStats {
            directory: self.dir.clone(),
            keys,
            total_size,
        })
    }
}
