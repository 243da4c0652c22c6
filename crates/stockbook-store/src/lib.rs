//! # stockbook-store: Storage Layer for Stockbook
//!
//! This crate provides persistence for the Stockbook inventory console.
//! Every entity lives in its own record store: one in-memory collection,
//! serialized whole to a named JSON snapshot after each mutation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockbook Data Flow                              │
//! │                                                                         │
//! │  Caller (page/shell/test)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockbook-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌──────────────┐     │   │
//! │  │   │   Inventory   │   │ Record stores │   │  Snapshots   │     │   │
//! │  │   │ (service)     │──►│ Product/Sale/ │──►│  <key>.json  │     │   │
//! │  │   │ sale/purchase │   │ Client/...    │   │  atomic save │     │   │
//! │  │   │ flows, reset  │   │ CRUD + queries│   │              │     │   │
//! │  │   └───────────────┘   └───────────────┘   └──────────────┘     │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data-dir>/products.json, sales.json, movements.json, ...              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`snapshot`] - Snapshot directory handle and config
//! - [`collection`] - The generic collection engine behind every store
//! - [`store`] - Per-entity stores
//! - [`inventory`] - The service owning all stores (multi-store flows)
//! - [`seed`] - Hardcoded initial data
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockbook_store::{Inventory, StoreConfig};
//!
//! let mut inventory = Inventory::open(StoreConfig::new("./data"))?;
//! inventory.reset_all()?;
//!
//! let low = inventory.products().low_stock();
//! ```
//!
//! ## Concurrency Model
//!
//! There is none, on purpose: stores take `&mut self` and all mutations
//! are synchronous. One process, one owner, last write wins. Two open
//! editors racing on one record is resolved by whoever saves second.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod error;
pub mod inventory;
pub mod seed;
pub mod snapshot;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use inventory::Inventory;
pub use snapshot::{Snapshots, StoreConfig};

// Store re-exports for convenience
pub use store::{
    ClientStore, MovementStore, ProductStore, PurchaseStore, SaleStore, SettingsStore,
    SupplierStore,
};
