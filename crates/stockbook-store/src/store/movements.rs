//! # Movement Store
//!
//! The append-only stock movement log. Entries are never updated or
//! individually deleted. The log only grows, and is cleared wholesale
//! by a reset.

use chrono::{DateTime, Utc};
use tracing::debug;

use stockbook_core::{new_record_id, Movement, MovementKind};

use crate::collection::{Collection, Record};
use crate::error::StoreResult;
use crate::snapshot::Snapshots;

impl Record for Movement {
    const KEY: &'static str = "movements";

    fn id(&self) -> &str {
        &self.id
    }

    /// Movements are append-only; there is no `updated_at` to bump.
    fn touch(&mut self, _at: DateTime<Utc>) {}
}

/// Store for stock movement log entries.
#[derive(Debug)]
pub struct MovementStore {
    inner: Collection<Movement>,
}

impl MovementStore {
    pub fn open(snapshots: Snapshots) -> StoreResult<Self> {
        Ok(MovementStore {
            inner: Collection::open(snapshots)?,
        })
    }

    /// Appends one log entry and persists.
    pub fn append(
        &mut self,
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        kind: MovementKind,
        quantity: i64,
        new_stock: i64,
        reason: Option<String>,
    ) -> StoreResult<Movement> {
        let movement = Movement {
            id: new_record_id(),
            product_id: product_id.into(),
            product_name: product_name.into(),
            kind,
            quantity,
            new_stock,
            reason,
            created_at: Utc::now(),
        };

        debug!(
            product_id = %movement.product_id,
            kind = ?movement.kind,
            quantity = movement.quantity,
            new_stock = movement.new_stock,
            "Appending movement"
        );

        self.inner.add(movement.clone())?;
        Ok(movement)
    }

    pub fn get(&self, id: &str) -> Option<&Movement> {
        self.inner.get(id)
    }

    pub fn all(&self) -> &[Movement] {
        self.inner.all()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The `n` most recent movements, newest first.
    pub fn recent(&self, n: usize) -> Vec<&Movement> {
        let mut movements: Vec<&Movement> = self.inner.all().iter().collect();
        movements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        movements.truncate(n);
        movements
    }

    /// The history of one product, insertion order.
    pub fn for_product(&self, product_id: &str) -> Vec<&Movement> {
        self.inner
            .all()
            .iter()
            .filter(|m| m.product_id == product_id)
            .collect()
    }

    /// Wipes the log. Only reset-to-seed calls this.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.inner.replace_all(Vec::new())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StoreConfig;

    fn open_temp() -> (tempfile::TempDir, MovementStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshots = Snapshots::open(StoreConfig::new(dir.path())).expect("open");
        let store = MovementStore::open(snapshots).expect("store");
        (dir, store)
    }

    #[test]
    fn test_append_and_history() {
        let (_dir, mut store) = open_temp();
        store
            .append("p1", "Widget", MovementKind::Sale, -2, 8, None)
            .unwrap();
        store
            .append(
                "p1",
                "Widget",
                MovementKind::Adjustment,
                5,
                13,
                Some("recount".to_string()),
            )
            .unwrap();
        store
            .append("p2", "Gadget", MovementKind::Return, 1, 4, None)
            .unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.for_product("p1").len(), 2);
        assert_eq!(store.for_product("p1")[1].reason.as_deref(), Some("recount"));
    }

    #[test]
    fn test_recent_truncates_newest_first() {
        let (_dir, mut store) = open_temp();
        for i in 0..5 {
            store
                .append("p1", "Widget", MovementKind::Adjustment, 1, i, None)
                .unwrap();
        }

        let recent = store.recent(2);
        assert_eq!(recent.len(), 2);
        assert!(recent[0].created_at >= recent[1].created_at);
    }

    #[test]
    fn test_clear_wipes_the_log() {
        let (_dir, mut store) = open_temp();
        store
            .append("p1", "Widget", MovementKind::Sale, -1, 9, None)
            .unwrap();

        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
