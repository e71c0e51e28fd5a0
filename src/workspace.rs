//! Application state for one session.
//!
//! A `Workspace` owns the configuration, the state store and everything
//! loaded from it. Commands receive it by reference; nothing lives in
//! globals.

use crate::columns::ColumnProfile;
use crate::config::Config;
use crate::export::ExportOptions;
use crate::pitch::{PitchList, SimulatedLookup};
use crate::storage::{StorageError, StorageManager};

#[derive(Debug)]
pub struct Workspace {
    config: Config,
    storage: StorageManager,
    columns: ColumnProfile,
    pitch: PitchList,
}

impl Workspace {
    /// Create the state directory if needed and load persisted state.
    pub fn open(config: Config) -> Result<Self, StorageError> {
        let storage = StorageManager::new(&config);
        storage.ensure_storage_dir()?;
        Ok(Self::with_storage(config, storage))
    }

    /// Open against an explicit store, ignoring the configured directory.
    pub fn with_storage(config: Config, storage: StorageManager) -> Self {
        let columns = ColumnProfile::load(&storage);
        let pitch = PitchList::load(&storage);
        Self {
            config,
            storage,
            columns,
            pitch,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &StorageManager {
        &self.storage
    }

    pub fn columns(&self) -> &ColumnProfile {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut ColumnProfile {
        &mut self.columns
    }

    pub fn pitch(&self) -> &PitchList {
        &self.pitch
    }

    pub fn pitch_mut(&mut self) -> &mut PitchList {
        &mut self.pitch
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::from(&self.config)
    }

    /// The configured e-mail lookup.
    pub fn email_lookup(&self) -> SimulatedLookup {
        SimulatedLookup::new(&self.config.email_lookup)
    }
}
