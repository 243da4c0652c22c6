//! # Store Error Types
//!
//! Error types for snapshot persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the snapshot key for context           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller shows a human-readable message                                  │
//! │                                                                         │
//! │  CoreError (business rules) also funnels through StoreError so the      │
//! │  service flows have a single error surface.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is deliberately absent: there is no `NotFound` variant for
//! plain store mutations. `update`/`remove` against a missing id report
//! `Ok(false)` and move on.

use stockbook_core::CoreError;
use thiserror::Error;

/// Snapshot persistence and service-flow errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file exists but could not be read.
    ///
    /// ## When This Occurs
    /// - File permissions issue
    /// - Disk/media failure mid-read
    #[error("snapshot '{key}' could not be read: {source}")]
    SnapshotRead {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file could not be written or the data directory
    /// could not be created.
    #[error("snapshot '{key}' could not be written: {source}")]
    SnapshotWrite {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file holds something that is not the expected JSON.
    ///
    /// ## When This Occurs
    /// - Hand-edited snapshot
    /// - Truncated write from a crash predating atomic writes
    #[error("snapshot '{key}' is not valid JSON: {source}")]
    SnapshotDecode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collection failed to serialize. Practically unreachable for
    /// these types; surfaced rather than swallowed.
    #[error("snapshot '{key}' could not be encoded: {source}")]
    SnapshotEncode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A business rule violation from a service flow.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<stockbook_core::ValidationError> for StoreError {
    fn from(err: stockbook_core::ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let err: StoreError = CoreError::EmptySale.into();
        assert!(matches!(err, StoreError::Core(CoreError::EmptySale)));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: StoreError = stockbook_core::ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Validation error: name is required");
    }

    #[test]
    fn test_snapshot_error_names_the_key() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::SnapshotRead {
            key: "products".to_string(),
            source: io,
        };
        assert!(err.to_string().contains("products"));
    }
}
