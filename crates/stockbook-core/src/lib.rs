//! # stockbook-core: Pure Business Logic for Stockbook
//!
//! This crate is the **heart** of Stockbook. It contains all business
//! logic as pure functions and plain types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockbook Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Frontend shell (out of scope here)               │   │
//! │  │    Product pages ──► Sale forms ──► Dashboard ──► Reports       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               stockbook-store (Storage Layer)                   │   │
//! │  │     record stores, JSON snapshots, Inventory service, seed      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockbook-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  metrics  │  │  paging   │   │   │
//! │  │   │  Product  │  │   Money   │  │ DayBucket │  │ PageItem  │   │   │
//! │  │   │   Sale    │  │  (cents)  │  │ TopSales  │  │  window   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Purchase, Movement, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ident`] - Record id generation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//! - [`paging`] - Page-strip windowing for paginated tables
//! - [`metrics`] - Dashboard/report aggregates
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: aggregates and windowing are deterministic
//! 2. **No I/O**: persistence lives in stockbook-store, never here
//! 3. **Integer Money**: all monetary values are cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stockbook_core::money::Money;
//! use stockbook_core::paging::{page_items, PageItem};
//!
//! // Line-item math in integer cents
//! let unit_price = Money::from_cents(1099);
//! assert_eq!(unit_price.multiply_quantity(3).cents(), 3297);
//!
//! // Page strip for page 5 of 9
//! let strip = page_items(5, 9);
//! assert_eq!(strip.first(), Some(&PageItem::Page(1)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ident;
pub mod metrics;
pub mod money;
pub mod paging;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockbook_core::Money` instead of
// `use stockbook_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use ident::new_record_id;
pub use money::Money;
pub use types::*;
