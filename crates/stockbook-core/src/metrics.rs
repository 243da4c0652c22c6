//! # Derived Metrics
//!
//! Aggregates behind the dashboard and reports pages. Every function
//! here iterates the full collection it is given: O(n) over small
//! in-memory arrays, recomputed on every call, no incremental
//! maintenance and no caching.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Dashboard Data Flow                                │
//! │                                                                         │
//! │  SaleStore.all() ──► total_revenue / average_sale / revenue_by_day      │
//! │  SaleStore.all() ──► top_products                                       │
//! │  ProductStore.all() ──► inventory_value_by_category / low_stock         │
//! │                                                                         │
//! │  Pure slices in, plain records out; the shell renders them.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::money::Money;
use crate::types::{Product, Sale};

// =============================================================================
// Report Records
// =============================================================================

/// Revenue for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub total: Money,
    /// Number of sales that day.
    pub count: usize,
}

/// Inventory value held in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub category: String,
    /// Sum of `price × stock` over the category's products.
    pub value: Money,
    pub product_count: usize,
}

/// Sales performance of one product across all sale line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product_id: String,
    /// Name as frozen on the line items (latest occurrence wins).
    pub name: String,
    pub units_sold: i64,
    pub revenue: Money,
}

// =============================================================================
// Sales Aggregates
// =============================================================================

/// Sum of all sale totals.
pub fn total_revenue(sales: &[Sale]) -> Money {
    sales.iter().map(|sale| sale.total).sum()
}

/// Mean sale total, zero when there are no sales. Integer division in
/// cents; the lost remainder is at most `len - 1` cents.
pub fn average_sale(sales: &[Sale]) -> Money {
    if sales.is_empty() {
        return Money::zero();
    }
    Money::from_cents(total_revenue(sales).cents() / sales.len() as i64)
}

/// Buckets revenue by calendar day over the last `days` days ending at
/// `today`, oldest first, zero-filled for days without sales.
///
/// Bucketing is by date equality on the sale's creation date, matching
/// how the reports page groups its chart.
pub fn revenue_by_day(sales: &[Sale], days: u32, today: NaiveDate) -> Vec<DayBucket> {
    if days == 0 {
        return Vec::new();
    }

    let mut buckets: Vec<DayBucket> = (0..days)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back as u64)))
        .map(|date| DayBucket {
            date,
            total: Money::zero(),
            count: 0,
        })
        .collect();

    for sale in sales {
        let date = sale.created_at.date_naive();
        if let Some(bucket) = buckets.iter_mut().find(|b| b.date == date) {
            bucket.total += sale.total;
            bucket.count += 1;
        }
    }

    buckets
}

/// Units and revenue per product across all sale line items, revenue
/// descending, truncated to `limit`.
pub fn top_products(sales: &[Sale], limit: usize) -> Vec<ProductSales> {
    let mut by_product: HashMap<String, ProductSales> = HashMap::new();

    for sale in sales {
        for item in &sale.items {
            let entry = by_product
                .entry(item.product_id.clone())
                .or_insert_with(|| ProductSales {
                    product_id: item.product_id.clone(),
                    name: item.name.clone(),
                    units_sold: 0,
                    revenue: Money::zero(),
                });
            entry.name = item.name.clone();
            entry.units_sold += item.quantity;
            entry.revenue += item.subtotal;
        }
    }

    let mut ranked: Vec<ProductSales> = by_product.into_values().collect();
    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue).then(a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}

// =============================================================================
// Product Aggregates
// =============================================================================

/// Per-category sum of `price × stock`, value descending. Ties break by
/// category name so the output is deterministic.
pub fn inventory_value_by_category(products: &[Product]) -> Vec<CategoryValue> {
    let mut by_category: HashMap<&str, CategoryValue> = HashMap::new();

    for product in products {
        let entry = by_category
            .entry(product.category.as_str())
            .or_insert_with(|| CategoryValue {
                category: product.category.clone(),
                value: Money::zero(),
                product_count: 0,
            });
        entry.value += product.stock_value();
        entry.product_count += 1;
    }

    let mut ranked: Vec<CategoryValue> = by_category.into_values().collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value).then(a.category.cmp(&b.category)));
    ranked
}

/// Products at or below their low-stock threshold, worst first
/// (largest shortfall relative to the threshold).
pub fn low_stock_products(products: &[Product]) -> Vec<&Product> {
    let mut low: Vec<&Product> = products.iter().filter(|p| p.is_low_stock()).collect();
    low.sort_by_key(|p| p.stock - p.min_stock);
    low
}

// =============================================================================
// Unit Tests
// =============================================================================
