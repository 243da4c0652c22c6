//! # Product Store
//!
//! Catalog records and stock levels.
//!
//! ## Key Operations
//! - CRUD with patch-style updates
//! - Substring search over name / sku / category
//! - Stock adjustment by signed delta
//! - Low-stock listing
//!
//! Stock adjustments here are raw deltas with no sign policing; manual
//! corrections may legitimately drive stock negative. The guarded paths
//! (selling, receiving) live in the `Inventory` service.

use chrono::{DateTime, Utc};
use tracing::debug;

use stockbook_core::validation::validate_new_product;
use stockbook_core::{new_record_id, Money, NewProduct, Product, ProductPatch};

use crate::collection::{Collection, Record};
use crate::error::StoreResult;
use crate::snapshot::Snapshots;

impl Record for Product {
    const KEY: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Store for product records.
#[derive(Debug)]
pub struct ProductStore {
    inner: Collection<Product>,
}

impl ProductStore {
    /// Opens the store from its snapshot.
    pub fn open(snapshots: Snapshots) -> StoreResult<Self> {
        Ok(ProductStore {
            inner: Collection::open(snapshots)?,
        })
    }

    /// Validates the input, builds the record (generated id, both
    /// timestamps set to now), appends, and persists.
    pub fn add(&mut self, input: NewProduct) -> StoreResult<Product> {
        validate_new_product(&input)?;

        let now = Utc::now();
        let product = Product {
            id: new_record_id(),
            name: input.name.trim().to_string(),
            sku: input.sku.trim().to_string(),
            category: input.category.trim().to_string(),
            price: input.price,
            stock: input.stock,
            min_stock: input.min_stock,
            description: input.description,
            image: input.image,
            created_at: now,
            updated_at: now,
        };

        self.inner.add(product.clone())?;
        Ok(product)
    }

    /// Merges the patch into the matching record. Silent no-op when the
    /// id is absent (`Ok(false)`).
    pub fn update(&mut self, id: &str, patch: ProductPatch) -> StoreResult<bool> {
        self.inner.update_with(id, |product| {
            if let Some(name) = patch.name {
                product.name = name;
            }
            if let Some(sku) = patch.sku {
                product.sku = sku;
            }
            if let Some(category) = patch.category {
                product.category = category;
            }
            if let Some(price) = patch.price {
                product.price = price;
            }
            if let Some(stock) = patch.stock {
                product.stock = stock;
            }
            if let Some(min_stock) = patch.min_stock {
                product.min_stock = min_stock;
            }
            if let Some(description) = patch.description {
                product.description = description;
            }
            if let Some(image) = patch.image {
                product.image = image;
            }
        })
    }

    /// Removes the product. Silent when absent.
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        self.inner.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.inner.get(id)
    }

    pub fn all(&self) -> &[Product] {
        self.inner.all()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// First product with this SKU, if any. SKUs are not enforced
    /// unique; duplicates resolve to the earliest record.
    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        self.inner.all().iter().find(|p| p.sku == sku)
    }

    /// Case-insensitive substring search over name, sku, and category.
    /// An empty query returns everything (the page's unfiltered view).
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.inner.all().iter().collect();
        }

        self.inner
            .all()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.sku.to_lowercase().contains(&query)
                    || p.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Products at or below their low-stock threshold.
    pub fn low_stock(&self) -> Vec<&Product> {
        stockbook_core::metrics::low_stock_products(self.inner.all())
    }

    /// Total value of stock on hand across the catalog.
    pub fn inventory_value(&self) -> Money {
        self.inner.all().iter().map(Product::stock_value).sum()
    }

    /// Applies a signed stock delta and persists.
    ///
    /// ## Returns
    /// * `Ok(Some(new_stock))` - the resulting level
    /// * `Ok(None)` - no product with that id; nothing written
    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> StoreResult<Option<i64>> {
        let mut new_stock = None;
        self.inner.update_with(id, |product| {
            product.stock += delta;
            new_stock = Some(product.stock);
        })?;

        if let Some(level) = new_stock {
            debug!(id = id, delta = delta, new_stock = level, "Adjusted stock");
        }
        Ok(new_stock)
    }

    /// Wholesale replacement (reset-to-seed).
    pub fn replace_all(&mut self, products: Vec<Product>) -> StoreResult<()> {
        self.inner.replace_all(products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StoreConfig;

    fn open_temp() -> (tempfile::TempDir, ProductStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshots = Snapshots::open(StoreConfig::new(dir.path())).expect("open");
        let store = ProductStore::open(snapshots).expect("store");
        (dir, store)
    }

    fn widget() -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            sku: "W-1".to_string(),
            category: "Hardware".to_string(),
            price: Money::from_cents(499),
            stock: 10,
            min_stock: 3,
            description: Some("A fine widget".to_string()),
            image: None,
        }
    }

    #[test]
    fn test_add_generates_id_and_timestamps() {
        let (_dir, mut store) = open_temp();
        let product = store.add(widget()).unwrap();

        assert!(product.id.contains('-'));
        assert_eq!(product.created_at, product.updated_at);

        let fetched = store.get(&product.id).unwrap();
        assert_eq!(fetched.name, "Widget");
        assert_eq!(fetched.price.cents(), 499);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (_dir, mut store) = open_temp();
        let mut input = widget();
        input.name = "  ".to_string();
        assert!(store.add(input).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_patch_changes_exactly_the_patched_fields() {
        let (_dir, mut store) = open_temp();
        let product = store.add(widget()).unwrap();

        let patch = ProductPatch {
            price: Some(Money::from_cents(599)),
            description: Some(None), // clear it
            ..ProductPatch::default()
        };
        assert!(store.update(&product.id, patch).unwrap());

        let updated = store.get(&product.id).unwrap();
        assert_eq!(updated.price.cents(), 599);
        assert_eq!(updated.description, None);
        // Untouched fields survive.
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.stock, 10);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_update_missing_is_silent() {
        let (_dir, mut store) = open_temp();
        let matched = store.update("ghost", ProductPatch::default()).unwrap();
        assert!(!matched);
    }

    #[test]
    fn test_search_matches_name_sku_category() {
        let (_dir, mut store) = open_temp();
        store.add(widget()).unwrap();
        let mut other = widget();
        other.name = "Gadget".to_string();
        other.sku = "G-1".to_string();
        other.category = "Tools".to_string();
        store.add(other).unwrap();

        assert_eq!(store.search("widg").len(), 1);
        assert_eq!(store.search("g-1").len(), 1);
        assert_eq!(store.search("tool").len(), 1);
        assert_eq!(store.search("").len(), 2);
        assert!(store.search("zzz").is_empty());
    }

    #[test]
    fn test_adjust_stock_signed() {
        let (_dir, mut store) = open_temp();
        let product = store.add(widget()).unwrap();

        assert_eq!(store.adjust_stock(&product.id, -4).unwrap(), Some(6));
        assert_eq!(store.adjust_stock(&product.id, 10).unwrap(), Some(16));
        // Raw adjustments may go negative.
        assert_eq!(store.adjust_stock(&product.id, -100).unwrap(), Some(-84));
        assert_eq!(store.adjust_stock("ghost", 1).unwrap(), None);
    }

    #[test]
    fn test_low_stock_and_inventory_value() {
        let (_dir, mut store) = open_temp();
        let product = store.add(widget()).unwrap();
        assert!(store.low_stock().is_empty());

        store.adjust_stock(&product.id, -7).unwrap(); // stock 3 == min_stock
        assert_eq!(store.low_stock().len(), 1);
        assert_eq!(store.inventory_value().cents(), 3 * 499);
    }
}
