//! # Sale Store
//!
//! Recorded sales. Line items and totals are frozen at recording time;
//! the store only ever corrects header metadata afterwards.
//!
//! Note the store's permissiveness: it checks nothing about stock or
//! product existence. The guarded path is `Inventory::record_sale`,
//! which validates and moves stock before calling in here.

use chrono::{DateTime, Utc};

use stockbook_core::{
    new_record_id, total_of, Money, PaymentMethod, Sale, SaleItem, SalePatch,
};

use crate::collection::{Collection, Record};
use crate::error::StoreResult;
use crate::snapshot::Snapshots;

impl Record for Sale {
    const KEY: &'static str = "sales";

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Store for sale records.
#[derive(Debug)]
pub struct SaleStore {
    inner: Collection<Sale>,
}

impl SaleStore {
    pub fn open(snapshots: Snapshots) -> StoreResult<Self> {
        Ok(SaleStore {
            inner: Collection::open(snapshots)?,
        })
    }

    /// Appends a sale built from already-frozen line items. The total is
    /// computed here as the sum of item subtotals.
    pub fn add(
        &mut self,
        items: Vec<SaleItem>,
        payment_method: PaymentMethod,
        client_name: Option<String>,
        client_email: Option<String>,
    ) -> StoreResult<Sale> {
        let now = Utc::now();
        let sale = Sale {
            id: new_record_id(),
            total: total_of(&items),
            items,
            payment_method,
            client_name,
            client_email,
            created_at: now,
            updated_at: now,
        };

        self.inner.add(sale.clone())?;
        Ok(sale)
    }

    /// Corrects header metadata. Silent no-op when the id is absent.
    pub fn update(&mut self, id: &str, patch: SalePatch) -> StoreResult<bool> {
        self.inner.update_with(id, |sale| {
            if let Some(payment_method) = patch.payment_method {
                sale.payment_method = payment_method;
            }
            if let Some(client_name) = patch.client_name {
                sale.client_name = client_name;
            }
            if let Some(client_email) = patch.client_email {
                sale.client_email = client_email;
            }
        })
    }

    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        self.inner.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Sale> {
        self.inner.get(id)
    }

    pub fn all(&self) -> &[Sale] {
        self.inner.all()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Sum of all sale totals.
    pub fn total_revenue(&self) -> Money {
        stockbook_core::metrics::total_revenue(self.inner.all())
    }

    /// The `n` most recent sales, newest first.
    pub fn recent(&self, n: usize) -> Vec<&Sale> {
        let mut sales: Vec<&Sale> = self.inner.all().iter().collect();
        sales.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sales.truncate(n);
        sales
    }

    /// Sales whose client name matches case-insensitively.
    pub fn for_client(&self, name: &str) -> Vec<&Sale> {
        let name = name.to_lowercase();
        self.inner
            .all()
            .iter()
            .filter(|s| {
                s.client_name
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase() == name)
            })
            .collect()
    }

    pub fn replace_all(&mut self, sales: Vec<Sale>) -> StoreResult<()> {
        self.inner.replace_all(sales)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
