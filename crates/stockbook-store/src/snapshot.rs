//! # Snapshot Persistence
//!
//! Named-key JSON snapshots: the local-storage analog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Snapshot Layout                                   │
//! │                                                                         │
//! │  StoreConfig::new("~/.local/share/stockbook")                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Snapshots::open(config) ← creates the directory on first run           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data-dir>/                                                            │
//! │  ├── products.json      ← ProductStore  (full collection, verbatim)     │
//! │  ├── clients.json       ← ClientStore                                   │
//! │  ├── suppliers.json     ← SupplierStore                                 │
//! │  ├── sales.json         ← SaleStore                                     │
//! │  ├── purchases.json     ← PurchaseStore                                 │
//! │  ├── movements.json     ← MovementStore                                 │
//! │  └── settings.json      ← SettingsStore (singleton object)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every store mutation rewrites its entire snapshot (last write wins,
//! no deltas, no schema version on disk). Writes go through a temp file
//! and a rename so a crash mid-write never leaves a torn snapshot.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Configuration
// =============================================================================

/// Storage configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("/var/lib/stockbook");
/// let snapshots = Snapshots::open(config)?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one `<key>.json` file per store.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
        }
    }
}

// =============================================================================
// Snapshots
// =============================================================================

/// Handle to the snapshot directory.
///
/// Cheap to clone; every store keeps one and persists through it after
/// each mutation.
#[derive(Debug, Clone)]
pub struct Snapshots {
    dir: PathBuf,
}

impl Snapshots {
    /// Opens the snapshot directory, creating it if needed.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        fs::create_dir_all(&config.data_dir).map_err(|source| StoreError::SnapshotWrite {
            key: config.data_dir.display().to_string(),
            source,
        })?;

        info!(dir = %config.data_dir.display(), "Opened snapshot directory");
        Ok(Snapshots {
            dir: config.data_dir,
        })
    }

    /// Path of the snapshot file for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Loads the snapshot under `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - snapshot present and decoded
    /// * `Ok(None)` - no snapshot yet (first run)
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let path = self.path_for(key);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(key = %key, "No snapshot on disk, starting empty");
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::SnapshotRead {
                    key: key.to_string(),
                    source,
                })
            }
        };

        let value = serde_json::from_slice(&bytes).map_err(|source| StoreError::SnapshotDecode {
            key: key.to_string(),
            source,
        })?;

        debug!(key = %key, bytes = bytes.len(), "Loaded snapshot");
        Ok(Some(value))
    }

    /// Writes the full snapshot under `key`, atomically.
    ///
    /// The value is serialized to `<key>.json.tmp` and renamed over the
    /// real file, so readers only ever see a complete snapshot.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json =
            serde_json::to_vec_pretty(value).map_err(|source| StoreError::SnapshotEncode {
                key: key.to_string(),
                source,
            })?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        let write = fs::write(&tmp, &json).and_then(|_| fs::rename(&tmp, &path));
        write.map_err(|source| StoreError::SnapshotWrite {
            key: key.to_string(),
            source,
        })?;

        debug!(key = %key, bytes = json.len(), "Wrote snapshot");
        Ok(())
    }

    /// Whether a snapshot exists for `key`.
    pub fn exists(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }

    /// The directory this handle is rooted at.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, Snapshots) {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshots = Snapshots::open(StoreConfig::new(dir.path())).expect("open");
        (dir, snapshots)
    }

    #[test]
    fn test_missing_snapshot_loads_as_none() {
        let (_dir, snapshots) = open_temp();
        let loaded: Option<Vec<String>> = snapshots.load("products").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_round_trip() {
        let (_dir, snapshots) = open_temp();
        let records = vec!["a".to_string(), "b".to_string()];

        snapshots.save("clients", &records).unwrap();
        let loaded: Option<Vec<String>> = snapshots.load("clients").unwrap();
        assert_eq!(loaded, Some(records));
    }

    #[test]
    fn test_save_overwrites_whole_snapshot() {
        let (_dir, snapshots) = open_temp();

        snapshots.save("sales", &vec![1, 2, 3]).unwrap();
        snapshots.save("sales", &vec![9]).unwrap();

        let loaded: Option<Vec<i32>> = snapshots.load("sales").unwrap();
        assert_eq!(loaded, Some(vec![9]));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (_dir, snapshots) = open_temp();
        snapshots.save("movements", &Vec::<i32>::new()).unwrap();

        assert!(snapshots.exists("movements"));
        assert!(!snapshots.dir().join("movements.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_snapshot_is_a_decode_error() {
        let (_dir, snapshots) = open_temp();
        std::fs::write(snapshots.path_for("products"), b"{not json").unwrap();

        let result: StoreResult<Option<Vec<String>>> = snapshots.load("products");
        assert!(matches!(
            result,
            Err(StoreError::SnapshotDecode { .. })
        ));
    }
}
