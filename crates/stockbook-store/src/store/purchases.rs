//! # Purchase Store
//!
//! Purchase orders against suppliers. Records are created `Pending`;
//! the status field is raw storage here. Transition rules (who may
//! move `Pending` to `Received`/`Cancelled`, and what that does to
//! stock) are enforced by `Inventory`, not by this store.

use chrono::{DateTime, Utc};

use stockbook_core::{new_record_id, total_of, Purchase, PurchaseItem, PurchaseStatus};

use crate::collection::{Collection, Record};
use crate::error::StoreResult;
use crate::snapshot::Snapshots;

impl Record for Purchase {
    const KEY: &'static str = "purchases";

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Store for purchase orders.
#[derive(Debug)]
pub struct PurchaseStore {
    inner: Collection<Purchase>,
}

impl PurchaseStore {
    pub fn open(snapshots: Snapshots) -> StoreResult<Self> {
        Ok(PurchaseStore {
            inner: Collection::open(snapshots)?,
        })
    }

    /// Appends a purchase order in `Pending` status. The total is the
    /// sum of item subtotals.
    pub fn add(
        &mut self,
        supplier_id: String,
        items: Vec<PurchaseItem>,
    ) -> StoreResult<Purchase> {
        let now = Utc::now();
        let purchase = Purchase {
            id: new_record_id(),
            supplier_id,
            total: total_of(&items),
            items,
            status: PurchaseStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.inner.add(purchase.clone())?;
        Ok(purchase)
    }

    /// Sets the status field, raw. Silent no-op when the id is absent.
    pub fn set_status(&mut self, id: &str, status: PurchaseStatus) -> StoreResult<bool> {
        self.inner
            .update_with(id, |purchase| purchase.status = status)
    }

    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        self.inner.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Purchase> {
        self.inner.get(id)
    }

    pub fn all(&self) -> &[Purchase] {
        self.inner.all()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Purchases placed against one supplier.
    pub fn for_supplier(&self, supplier_id: &str) -> Vec<&Purchase> {
        self.inner
            .all()
            .iter()
            .filter(|p| p.supplier_id == supplier_id)
            .collect()
    }

    /// Orders still awaiting delivery.
    pub fn pending(&self) -> Vec<&Purchase> {
        self.inner
            .all()
            .iter()
            .filter(|p| p.status == PurchaseStatus::Pending)
            .collect()
    }

    pub fn replace_all(&mut self, purchases: Vec<Purchase>) -> StoreResult<()> {
        self.inner.replace_all(purchases)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
