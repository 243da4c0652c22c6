//! # Generic Record Collection
//!
//! The engine shared by every record store: one in-memory `Vec` of
//! records, persisted verbatim to a named snapshot after each mutation.
//!
//! ## Contract (uniform across entities)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add(record)          append + persist                                  │
//! │  update_with(id, f)   merge in place, bump updated_at, persist          │
//! │                       → Ok(false) silently when the id is absent        │
//! │  remove(id)           filter out + persist                              │
//! │                       → Ok(false) silently; repeating is a no-op        │
//! │  get(id)              linear scan, Option<&T>                           │
//! │  all()                the full collection, insertion order              │
//! │  replace_all(vec)     wholesale replacement (reset-to-seed)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Linear scans are deliberate: collections are small, single-threaded,
//! and rewritten whole on every mutation anyway. There is no indexing,
//! no transaction, and no cross-collection consistency guarantee beyond
//! "last write wins".

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::StoreResult;
use crate::snapshot::Snapshots;

// =============================================================================
// Record Trait
// =============================================================================

/// A persistable record: knows its snapshot key, exposes its id, and
/// accepts an `updated_at` bump (a no-op for append-only entities).
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Snapshot key this entity's collection lives under.
    const KEY: &'static str;

    fn id(&self) -> &str;

    /// Bumps the record's `updated_at`. Append-only records (movements)
    /// implement this as a no-op.
    fn touch(&mut self, at: DateTime<Utc>);
}

// =============================================================================
// Collection
// =============================================================================

/// An in-memory collection of records backed by one snapshot file.
#[derive(Debug)]
pub struct Collection<T: Record> {
    snapshots: Snapshots,
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    /// Opens the collection, loading its snapshot if one exists.
    pub fn open(snapshots: Snapshots) -> StoreResult<Self> {
        let records: Vec<T> = snapshots.load(T::KEY)?.unwrap_or_default();
        debug!(key = T::KEY, count = records.len(), "Opened collection");

        Ok(Collection { snapshots, records })
    }

    /// Appends a record and persists the collection.
    pub fn add(&mut self, record: T) -> StoreResult<()> {
        debug!(key = T::KEY, id = record.id(), "Adding record");
        self.records.push(record);
        self.persist()
    }

    /// Applies `apply` to the record with `id`, bumps `updated_at`, and
    /// persists.
    ///
    /// ## Returns
    /// * `Ok(true)` - a record matched and was updated
    /// * `Ok(false)` - no record with that id; nothing written
    pub fn update_with(
        &mut self,
        id: &str,
        apply: impl FnOnce(&mut T),
    ) -> StoreResult<bool> {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            debug!(key = T::KEY, id = id, "Update matched nothing");
            return Ok(false);
        };

        apply(record);
        record.touch(Utc::now());
        debug!(key = T::KEY, id = id, "Updated record");
        self.persist()?;
        Ok(true)
    }

    /// Removes the record with `id` and persists.
    ///
    /// ## Returns
    /// * `Ok(true)` - exactly one record removed
    /// * `Ok(false)` - no record with that id; nothing written
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);

        if self.records.len() == before {
            debug!(key = T::KEY, id = id, "Remove matched nothing");
            return Ok(false);
        }

        debug!(key = T::KEY, id = id, "Removed record");
        self.persist()?;
        Ok(true)
    }

    /// Returns the record with `id`, if present.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// The full collection, insertion order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replaces the entire collection and persists. The only bulk
    /// operation in the system; used by reset-to-seed.
    pub fn replace_all(&mut self, records: Vec<T>) -> StoreResult<()> {
        debug!(key = T::KEY, count = records.len(), "Replacing collection");
        self.records = records;
        self.persist()
    }

    /// Writes the full collection to its snapshot.
    fn persist(&self) -> StoreResult<()> {
        self.snapshots.save(T::KEY, &self.records)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StoreConfig;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
        updated_at: DateTime<Utc>,
    }

    impl Record for Note {
        const KEY: &'static str = "notes";

        fn id(&self) -> &str {
            &self.id
        }

        fn touch(&mut self, at: DateTime<Utc>) {
            self.updated_at = at;
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
            updated_at: Utc::now(),
        }
    }

    fn open_temp() -> (tempfile::TempDir, Collection<Note>) {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshots = Snapshots::open(StoreConfig::new(dir.path())).expect("open");
        let collection = Collection::open(snapshots).expect("collection");
        (dir, collection)
    }

    #[test]
    fn test_add_then_get() {
        let (_dir, mut collection) = open_temp();
        collection.add(note("n1", "hello")).unwrap();

        let found = collection.get("n1").expect("present");
        assert_eq!(found.text, "hello");
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_update_bumps_updated_at() {
        let (_dir, mut collection) = open_temp();
        collection.add(note("n1", "hello")).unwrap();
        let before = collection.get("n1").unwrap().updated_at;

        let matched = collection
            .update_with("n1", |n| n.text = "edited".to_string())
            .unwrap();
        assert!(matched);

        let after = collection.get("n1").unwrap();
        assert_eq!(after.text, "edited");
        assert!(after.updated_at >= before);
    }

    #[test]
    fn test_update_missing_is_silent() {
        let (_dir, mut collection) = open_temp();
        let matched = collection
            .update_with("ghost", |n| n.text = "x".to_string())
            .unwrap();
        assert!(!matched);
    }

    #[test]
    fn test_remove_exactly_one_and_repeat_is_noop() {
        let (_dir, mut collection) = open_temp();
        collection.add(note("n1", "a")).unwrap();
        collection.add(note("n2", "b")).unwrap();

        assert!(collection.remove("n1").unwrap());
        assert_eq!(collection.len(), 1);

        // Repeating the delete is a no-op.
        assert!(!collection.remove("n1").unwrap());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_reopen_restores_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshots = Snapshots::open(StoreConfig::new(dir.path())).expect("open");

        let mut collection: Collection<Note> = Collection::open(snapshots.clone()).unwrap();
        collection.add(note("n1", "persisted")).unwrap();
        drop(collection);

        let reopened: Collection<Note> = Collection::open(snapshots).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get("n1").unwrap().text, "persisted");
    }

    #[test]
    fn test_replace_all() {
        let (_dir, mut collection) = open_temp();
        collection.add(note("n1", "old")).unwrap();

        collection
            .replace_all(vec![note("s1", "seed"), note("s2", "seed")])
            .unwrap();
        assert_eq!(collection.len(), 2);
        assert!(collection.get("n1").is_none());
    }
}
