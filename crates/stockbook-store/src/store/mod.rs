//! # Record Stores
//!
//! One store per entity, all built on the same [`Collection`] engine.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Pattern Explained                           │
//! │                                                                         │
//! │  Caller (page/service)                                                  │
//! │       │                                                                 │
//! │       │  products.search("key")                                         │
//! │       ▼                                                                 │
//! │  ProductStore                                                           │
//! │  ├── add(NewProduct) ─ validates, builds the record, persists           │
//! │  ├── update(id, ProductPatch) ─ merges fields, bumps updated_at         │
//! │  ├── remove(id) / get(id) / all()                                       │
//! │  └── derived queries (search, low_stock, find_by_sku, ...)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Collection<Product> ──► products.json snapshot                         │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • One uniform CRUD contract across entities                            │
//! │  • Persistence is invisible to callers                                  │
//! │  • Derived queries live next to the data they read                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Stores
//!
//! - [`ProductStore`] - catalog and stock levels
//! - [`ClientStore`] / [`SupplierStore`] - contact cards
//! - [`SaleStore`] / [`PurchaseStore`] - transactions
//! - [`MovementStore`] - append-only stock log
//! - [`SettingsStore`] - singleton application settings

pub mod clients;
pub mod movements;
pub mod products;
pub mod purchases;
pub mod sales;
pub mod settings;
pub mod suppliers;

pub use clients::ClientStore;
pub use movements::MovementStore;
pub use products::ProductStore;
pub use purchases::PurchaseStore;
pub use sales::SaleStore;
pub use settings::SettingsStore;
pub use suppliers::SupplierStore;
