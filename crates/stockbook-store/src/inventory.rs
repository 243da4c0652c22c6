//! # Inventory Service
//!
//! Owns every record store and drives the flows that touch more than
//! one of them.
//!
//! ## Why a Service Layer
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Recording a Sale                                     │
//! │                                                                         │
//! │  record_sale(draft)                                                     │
//! │       │                                                                 │
//! │       ├── 1. validate: non-empty, positive quantities,                  │
//! │       │      products exist, cumulative stock sufficient                │
//! │       │      (any failure → typed error, NOTHING written)               │
//! │       │                                                                 │
//! │       ├── 2. freeze line items (name, sku, price at time of sale)       │
//! │       │                                                                 │
//! │       ├── 3. per item: stock -= qty, append SALE movement               │
//! │       │                                                                 │
//! │       └── 4. append the sale (total = Σ subtotals)                      │
//! │                                                                         │
//! │  Steps 3-4 are a plain synchronous sequence: single-threaded, so        │
//! │  nothing interleaves. There is no rollback; only I/O failure can        │
//! │  interrupt it, and validation has already passed by then.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stores themselves stay permissive (a raw `SaleStore::add` checks
//! nothing); all business rules live here.

use std::collections::HashMap;
use tracing::info;

use stockbook_core::validation::validate_quantity;
use stockbook_core::{
    CoreError, Movement, MovementKind, Purchase, PurchaseDraft, PurchaseItem, PurchaseStatus,
    Sale, SaleDraft, SaleItem,
};

use crate::error::StoreResult;
use crate::seed;
use crate::snapshot::{Snapshots, StoreConfig};
use crate::store::{
    ClientStore, MovementStore, ProductStore, PurchaseStore, SaleStore, SettingsStore,
    SupplierStore,
};

/// The assembled storage layer: every store, opened from one snapshot
/// directory.
#[derive(Debug)]
pub struct Inventory {
    products: ProductStore,
    clients: ClientStore,
    suppliers: SupplierStore,
    sales: SaleStore,
    purchases: PurchaseStore,
    movements: MovementStore,
    settings: SettingsStore,
}

impl Inventory {
    /// Opens (or initializes) every store under the configured data
    /// directory.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let snapshots = Snapshots::open(config)?;

        Ok(Inventory {
            products: ProductStore::open(snapshots.clone())?,
            clients: ClientStore::open(snapshots.clone())?,
            suppliers: SupplierStore::open(snapshots.clone())?,
            sales: SaleStore::open(snapshots.clone())?,
            purchases: PurchaseStore::open(snapshots.clone())?,
            movements: MovementStore::open(snapshots.clone())?,
            settings: SettingsStore::open(snapshots)?,
        })
    }

    // =========================================================================
    // Store Accessors
    // =========================================================================

    pub fn products(&self) -> &ProductStore {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut ProductStore {
        &mut self.products
    }

    pub fn clients(&self) -> &ClientStore {
        &self.clients
    }

    pub fn clients_mut(&mut self) -> &mut ClientStore {
        &mut self.clients
    }

    pub fn suppliers(&self) -> &SupplierStore {
        &self.suppliers
    }

    pub fn suppliers_mut(&mut self) -> &mut SupplierStore {
        &mut self.suppliers
    }

    pub fn sales(&self) -> &SaleStore {
        &self.sales
    }

    pub fn sales_mut(&mut self) -> &mut SaleStore {
        &mut self.sales
    }

    pub fn purchases(&self) -> &PurchaseStore {
        &self.purchases
    }

    pub fn purchases_mut(&mut self) -> &mut PurchaseStore {
        &mut self.purchases
    }

    pub fn movements(&self) -> &MovementStore {
        &self.movements
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    // =========================================================================
    // Sale Flow
    // =========================================================================

    /// Records a sale: validates the draft, freezes line items from the
    /// current product records, decrements stock, logs one `SALE`
    /// movement per item, and appends the sale.
    ///
    /// ## Errors
    /// - [`CoreError::EmptySale`] - no lines
    /// - [`CoreError::ProductNotFound`] - a line references a missing product
    /// - [`CoreError::InsufficientStock`] - cumulative requested units
    ///   exceed what is on hand (duplicate lines for one product count
    ///   together)
    ///
    /// Nothing is written unless every check passes.
    pub fn record_sale(&mut self, draft: SaleDraft) -> StoreResult<Sale> {
        if draft.lines.is_empty() {
            return Err(CoreError::EmptySale.into());
        }

        let mut requested: HashMap<String, i64> = HashMap::new();
        let mut items: Vec<SaleItem> = Vec::with_capacity(draft.lines.len());

        for line in &draft.lines {
            validate_quantity(line.quantity)?;

            let product = self
                .products
                .get(&line.product_id)
                .ok_or_else(|| CoreError::ProductNotFound(line.product_id.clone()))?;

            let total = requested.entry(line.product_id.clone()).or_insert(0);
            *total += line.quantity;
            if *total > product.stock {
                return Err(CoreError::InsufficientStock {
                    sku: product.sku.clone(),
                    available: product.stock,
                    requested: *total,
                }
                .into());
            }

            items.push(SaleItem::new(
                &product.id,
                &product.name,
                &product.sku,
                line.quantity,
                product.price,
            ));
        }

        for item in &items {
            if let Some(new_stock) = self.products.adjust_stock(&item.product_id, -item.quantity)? {
                self.movements.append(
                    &item.product_id,
                    &item.name,
                    MovementKind::Sale,
                    -item.quantity,
                    new_stock,
                    None,
                )?;
            }
        }

        let sale = self.sales.add(
            items,
            draft.payment_method,
            draft.client_name,
            draft.client_email,
        )?;

        info!(sale_id = %sale.id, total = %sale.total, "Recorded sale");
        Ok(sale)
    }

    // =========================================================================
    // Purchase Flow
    // =========================================================================

    /// Records a purchase order in `Pending` status. Stock is untouched
    /// until [`Inventory::receive_purchase`].
    ///
    /// ## Errors
    /// - [`CoreError::EmptyPurchase`] - no lines
    /// - [`CoreError::SupplierNotFound`] / [`CoreError::ProductNotFound`]
    pub fn record_purchase(&mut self, draft: PurchaseDraft) -> StoreResult<Purchase> {
        if draft.lines.is_empty() {
            return Err(CoreError::EmptyPurchase.into());
        }

        if self.suppliers.get(&draft.supplier_id).is_none() {
            return Err(CoreError::SupplierNotFound(draft.supplier_id).into());
        }

        let mut items: Vec<PurchaseItem> = Vec::with_capacity(draft.lines.len());
        for line in &draft.lines {
            validate_quantity(line.quantity)?;

            let product = self
                .products
                .get(&line.product_id)
                .ok_or_else(|| CoreError::ProductNotFound(line.product_id.clone()))?;

            items.push(PurchaseItem::new(
                &product.id,
                &product.name,
                &product.sku,
                line.quantity,
                line.unit_cost,
            ));
        }

        let purchase = self.purchases.add(draft.supplier_id, items)?;
        info!(purchase_id = %purchase.id, total = %purchase.total, "Recorded purchase");
        Ok(purchase)
    }

    /// Receives a pending purchase: increments stock per item and logs
    /// one `PURCHASE` movement per item, then marks the order
    /// `Received`. Stock is applied exactly once per order.
    ///
    /// ## Errors
    /// - [`CoreError::PurchaseNotFound`]
    /// - [`CoreError::InvalidPurchaseStatus`] - already received/cancelled
    /// - [`CoreError::ProductNotFound`] - a line's product was deleted
    ///   after ordering; checked for every line before any stock moves
    pub fn receive_purchase(&mut self, id: &str) -> StoreResult<Purchase> {
        let purchase = self
            .purchases
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::PurchaseNotFound(id.to_string()))?;

        if purchase.status != PurchaseStatus::Pending {
            return Err(CoreError::InvalidPurchaseStatus {
                id: purchase.id,
                current: purchase.status.to_string(),
            }
            .into());
        }

        for item in &purchase.items {
            if self.products.get(&item.product_id).is_none() {
                return Err(CoreError::ProductNotFound(item.product_id.clone()).into());
            }
        }

        for item in &purchase.items {
            if let Some(new_stock) = self.products.adjust_stock(&item.product_id, item.quantity)? {
                self.movements.append(
                    &item.product_id,
                    &item.name,
                    MovementKind::Purchase,
                    item.quantity,
                    new_stock,
                    None,
                )?;
            }
        }

        self.purchases.set_status(id, PurchaseStatus::Received)?;
        info!(purchase_id = %id, "Received purchase");

        Ok(self.purchases.get(id).cloned().unwrap_or(purchase))
    }

    /// Cancels a pending purchase. No stock effect.
    ///
    /// ## Errors
    /// - [`CoreError::PurchaseNotFound`]
    /// - [`CoreError::InvalidPurchaseStatus`] - not `Pending`
    pub fn cancel_purchase(&mut self, id: &str) -> StoreResult<Purchase> {
        let purchase = self
            .purchases
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::PurchaseNotFound(id.to_string()))?;

        if purchase.status != PurchaseStatus::Pending {
            return Err(CoreError::InvalidPurchaseStatus {
                id: purchase.id,
                current: purchase.status.to_string(),
            }
            .into());
        }

        self.purchases.set_status(id, PurchaseStatus::Cancelled)?;
        info!(purchase_id = %id, "Cancelled purchase");

        Ok(self.purchases.get(id).cloned().unwrap_or(purchase))
    }

    // =========================================================================
    // Manual Stock Flows
    // =========================================================================

    /// Applies a manual stock correction and logs an `ADJUSTMENT`
    /// movement. The delta may be either sign and may drive stock
    /// negative (recounts correct reality, they don't argue with it).
    pub fn adjust_stock(
        &mut self,
        product_id: &str,
        delta: i64,
        reason: Option<String>,
    ) -> StoreResult<Movement> {
        let product = self
            .products
            .get(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;
        let name = product.name.clone();

        let new_stock = self
            .products
            .adjust_stock(product_id, delta)?
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        let movement = self.movements.append(
            product_id,
            name,
            MovementKind::Adjustment,
            delta,
            new_stock,
            reason,
        )?;

        info!(product_id = %product_id, delta = delta, new_stock = new_stock, "Adjusted stock");
        Ok(movement)
    }

    /// Restocks returned units and logs a `RETURN` movement.
    pub fn record_return(
        &mut self,
        product_id: &str,
        quantity: i64,
        reason: Option<String>,
    ) -> StoreResult<Movement> {
        validate_quantity(quantity)?;

        let product = self
            .products
            .get(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;
        let name = product.name.clone();

        let new_stock = self
            .products
            .adjust_stock(product_id, quantity)?
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        let movement = self.movements.append(
            product_id,
            name,
            MovementKind::Return,
            quantity,
            new_stock,
            reason,
        )?;

        info!(product_id = %product_id, quantity = quantity, "Recorded return");
        Ok(movement)
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Replaces every collection with the hardcoded seed, discarding all
    /// interim additions, edits, and deletions. The movement log is
    /// cleared wholesale and settings return to their defaults.
    pub fn reset_all(&mut self) -> StoreResult<()> {
        self.products.replace_all(seed::seed_products())?;
        self.clients.replace_all(seed::seed_clients())?;
        self.suppliers.replace_all(seed::seed_suppliers())?;
        self.sales.replace_all(Vec::new())?;
        self.purchases.replace_all(Vec::new())?;
        self.movements.clear()?;
        self.settings.reset()?;

        info!("Reset all stores to seed data");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
