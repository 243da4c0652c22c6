//! # Settings Store
//!
//! The application settings singleton. Unlike the record stores this
//! holds exactly one object, persisted under its own snapshot key;
//! a missing snapshot falls back to `Settings::default()`.

use tracing::debug;

use stockbook_core::Settings;

use crate::error::StoreResult;
use crate::snapshot::Snapshots;

const KEY: &str = "settings";

/// Store for the settings singleton.
#[derive(Debug)]
pub struct SettingsStore {
    snapshots: Snapshots,
    settings: Settings,
}

impl SettingsStore {
    /// Opens the store, loading the persisted settings or the defaults.
    pub fn open(snapshots: Snapshots) -> StoreResult<Self> {
        let settings = snapshots.load(KEY)?.unwrap_or_default();
        Ok(SettingsStore {
            snapshots,
            settings,
        })
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the settings and persists.
    pub fn set(&mut self, settings: Settings) -> StoreResult<()> {
        debug!(store_name = %settings.store_name, "Saving settings");
        self.settings = settings;
        self.snapshots.save(KEY, &self.settings)
    }

    /// Restores the defaults and persists (reset-to-seed path).
    pub fn reset(&mut self) -> StoreResult<()> {
        self.set(Settings::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
