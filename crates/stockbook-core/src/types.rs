//! # Domain Types
//!
//! Core domain types used throughout Stockbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────┐  ┌───────────────┐  ┌───────────────┐               │
//! │  │   Product     │  │     Sale      │  │   Purchase    │               │
//! │  │ ───────────── │  │ ───────────── │  │ ───────────── │               │
//! │  │ id            │  │ id            │  │ id            │               │
//! │  │ sku           │  │ items[]       │  │ supplier_id   │               │
//! │  │ price (cents) │  │ total (cents) │  │ status        │               │
//! │  │ stock         │  │ payment       │  │ items[]       │               │
//! │  └───────────────┘  └───────────────┘  └───────────────┘               │
//! │                                                                         │
//! │  ┌───────────────┐  ┌───────────────┐  ┌───────────────┐               │
//! │  │ Client        │  │ Supplier      │  │ Movement      │               │
//! │  │ (contact card)│  │ (contact card)│  │ (append-only  │               │
//! │  └───────────────┘  └───────────────┘  │  stock log)   │               │
//! │                                        └───────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - Every entity has `id`, `created_at`; mutable entities add `updated_at`
//! - Sale/purchase line items freeze product name, sku, and price at the
//!   time of the transaction (snapshot pattern) so later product edits do
//!   not rewrite history
//! - Patch types carry `Option` per field: `Some` sets, `None` leaves.
//!   Clearable fields use `Option<Option<_>>` where `Some(None)` clears.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (`<millis>-<suffix>`).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Free-form category label used for grouping in reports.
    pub category: String,

    /// Unit sale price in cents.
    pub price: Money,

    /// Units currently on hand. May go negative via manual adjustment;
    /// the sale flow refuses to drive it negative itself.
    pub stock: i64,

    /// Threshold at or below which the product counts as low stock.
    pub min_stock: i64,

    /// Optional description for product details.
    pub description: Option<String>,

    /// Optional image reference (path or URL; opaque to this layer).
    pub image: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Derived low-stock flag: `stock <= min_stock`.
    ///
    /// Computed on read, never persisted.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Value of the units on hand (`price × stock`).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price.multiply_quantity(self.stock)
    }
}

/// Input for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: Money,
    pub stock: i64,
    pub min_stock: i64,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Partial update for a product. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub price: Option<Money>,
    pub stock: Option<i64>,
    pub min_stock: Option<i64>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    /// `Some(None)` clears the image.
    pub image: Option<Option<String>>,
}

// =============================================================================
// Client
// =============================================================================

/// A customer contact card. Only the name is required.
///
/// No uniqueness constraint on email or tax id: two clients may share
/// either (the data model takes records at face value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub tax_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub tax_id: Option<String>,
    pub notes: Option<String>,
}

/// Partial update for a client.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub country: Option<Option<String>>,
    pub tax_id: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier contact card. Name, contact person, email, and phone are
/// all required; location fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub notes: Option<String>,
}

/// Partial update for a supplier.
#[derive(Debug, Clone, Default)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub country: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a sale was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on an external terminal.
    Card,
    /// Bank transfer.
    Transfer,
}

// =============================================================================
// Sale
// =============================================================================

/// A line item in a sale.
/// Uses the snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub name: String,
    /// SKU at time of sale (frozen).
    pub sku: String,
    /// Units sold.
    pub quantity: i64,
    /// Unit price in cents at time of sale (frozen).
    pub unit_price: Money,
    /// `unit_price × quantity`.
    pub subtotal: Money,
}

impl SaleItem {
    /// Builds a line item, computing the subtotal.
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        sku: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Self {
        SaleItem {
            product_id: product_id.into(),
            name: name.into(),
            sku: sku.into(),
            quantity,
            unit_price,
            subtotal: unit_price.multiply_quantity(quantity),
        }
    }
}

/// A recorded sale.
///
/// `total` is computed as the sum of item subtotals when the sale is
/// built from a draft; on load it is taken at face value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub items: Vec<SaleItem>,
    pub total: Money,
    pub payment_method: PaymentMethod,
    /// Free-text customer name (sales need not reference a client record).
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sums line-item subtotals into a sale/purchase total.
pub fn total_of<I, L>(items: I) -> Money
where
    I: IntoIterator<Item = L>,
    L: LineItem,
{
    items.into_iter().map(|item| item.subtotal()).sum()
}

/// Common surface over sale and purchase line items, for totalling and
/// per-product aggregation.
pub trait LineItem {
    fn product_id(&self) -> &str;
    fn quantity(&self) -> i64;
    fn subtotal(&self) -> Money;
}

impl LineItem for &SaleItem {
    fn product_id(&self) -> &str {
        &self.product_id
    }
    fn quantity(&self) -> i64 {
        self.quantity
    }
    fn subtotal(&self) -> Money {
        self.subtotal
    }
}

impl LineItem for &PurchaseItem {
    fn product_id(&self) -> &str {
        &self.product_id
    }
    fn quantity(&self) -> i64 {
        self.quantity
    }
    fn subtotal(&self) -> Money {
        self.subtotal
    }
}

/// Partial update for a sale's header fields. Line items and totals are
/// frozen once recorded; only the metadata may be corrected afterwards.
#[derive(Debug, Clone, Default)]
pub struct SalePatch {
    pub payment_method: Option<PaymentMethod>,
    pub client_name: Option<Option<String>>,
    pub client_email: Option<Option<String>>,
}

/// One requested line of a sale draft: which product, how many.
///
/// Name, sku, and price are frozen from the product record when the
/// draft is recorded, not supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    pub product_id: String,
    pub quantity: i64,
}

/// Input for recording a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDraft {
    pub lines: Vec<SaleLine>,
    pub payment_method: PaymentMethod,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
}

// =============================================================================
// Purchase
// =============================================================================

/// The status of a purchase order.
///
/// ## Transitions
/// ```text
/// Pending ──► Received   (stock applied once, on reception)
///    │
///    └─────► Cancelled   (no stock effect)
/// ```
/// `Received` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    /// Ordered, not yet delivered.
    Pending,
    /// Delivered; stock has been incremented.
    Received,
    /// Called off before delivery.
    Cancelled,
}

impl PurchaseStatus {
    /// Whether any further transition is allowed from this status.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PurchaseStatus::Pending)
    }
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PurchaseStatus::Pending => "pending",
            PurchaseStatus::Received => "received",
            PurchaseStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// A line item in a purchase order. Snapshot pattern, as with sales,
/// except the unit cost is typed in at order time rather than copied
/// from the product (purchase cost is not the sale price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub product_id: String,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub unit_cost: Money,
    /// `unit_cost × quantity`.
    pub subtotal: Money,
}

impl PurchaseItem {
    /// Builds a line item, computing the subtotal.
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        sku: impl Into<String>,
        quantity: i64,
        unit_cost: Money,
    ) -> Self {
        PurchaseItem {
            product_id: product_id.into(),
            name: name.into(),
            sku: sku.into(),
            quantity,
            unit_cost,
            subtotal: unit_cost.multiply_quantity(quantity),
        }
    }
}

/// A purchase order against a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    pub supplier_id: String,
    pub items: Vec<PurchaseItem>,
    pub total: Money,
    pub status: PurchaseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One requested line of a purchase draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub product_id: String,
    pub quantity: i64,
    /// Agreed unit cost for this order.
    pub unit_cost: Money,
}

/// Input for recording a purchase order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseDraft {
    pub supplier_id: String,
    pub lines: Vec<PurchaseLine>,
}

// =============================================================================
// Movement
// =============================================================================

/// Why a stock level changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementKind {
    /// Units left via a sale (negative quantity).
    Sale,
    /// Units arrived via a received purchase (positive quantity).
    Purchase,
    /// Manual correction, either sign.
    Adjustment,
    /// Units came back from a customer (positive quantity).
    Return,
}

/// One entry in the append-only stock movement log.
///
/// Movements are never updated or individually deleted; the log is only
/// cleared wholesale by a reset. `new_stock` records the resulting level
/// so the history reads without replaying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: String,
    pub product_id: String,
    /// Product name at the time of the movement (frozen).
    pub product_name: String,
    pub kind: MovementKind,
    /// Signed quantity: negative for outbound, positive for inbound.
    pub quantity: i64,
    /// Stock level after applying this movement.
    pub new_stock: i64,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Settings
// =============================================================================

/// UI theme preference. Persisted as data; rendering is the shell's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

/// Application settings. A singleton record persisted under its own
/// snapshot key. All configuration in this system is state, nothing is
/// driven by environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Shown in headers and receipts by any shell.
    pub store_name: String,
    pub theme: Theme,
    /// Surface an alert when a product crosses its low-stock threshold.
    pub notify_low_stock: bool,
    /// Surface a notification when a sale is recorded.
    pub notify_new_sale: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            store_name: "My Store".to_string(),
            theme: Theme::Light,
            notify_low_stock: true,
            notify_new_sale: false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
