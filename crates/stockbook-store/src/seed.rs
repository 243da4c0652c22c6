//! # Seed Data
//!
//! The hardcoded initial dataset: a small electronics catalog, a few
//! clients, and two suppliers. Reset-to-seed replaces every collection
//! with exactly these records, so everything here is deterministic:
//! fixed ids and fixed timestamps, so two resets produce deep-equal
//! collections.
//!
//! Sales, purchases, and movements seed empty; history starts blank.

use chrono::{DateTime, Utc};

use stockbook_core::{Client, Money, Product, Supplier};

/// Fixed creation instant for all seed records (2026-01-01T00:00:00Z).
const SEED_UNIX_SECONDS: i64 = 1_767_225_600;

fn seed_time() -> DateTime<Utc> {
    // The constant is a valid timestamp; the fallback is unreachable.
    DateTime::from_timestamp(SEED_UNIX_SECONDS, 0).unwrap_or_default()
}

fn seed_product(
    suffix: &str,
    name: &str,
    sku: &str,
    category: &str,
    price_cents: i64,
    stock: i64,
    min_stock: i64,
) -> Product {
    let at = seed_time();
    Product {
        id: format!("{}-{suffix}", SEED_UNIX_SECONDS * 1000),
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        price: Money::from_cents(price_cents),
        stock,
        min_stock,
        description: None,
        image: None,
        created_at: at,
        updated_at: at,
    }
}

/// The seed product catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        seed_product("aa000001", "Mechanical Keyboard 87", "KB-MECH-87", "Peripherals", 6999, 15, 5),
        seed_product("aa000002", "Wireless Mouse", "MS-WRL-01", "Peripherals", 2499, 30, 10),
        seed_product("aa000003", "USB-C Hub 7-in-1", "HUB-USBC-7", "Peripherals", 3999, 12, 4),
        seed_product("aa000004", "Studio Headphones", "HP-STUD-01", "Audio", 8999, 8, 3),
        seed_product("aa000005", "Desktop Speakers", "SPK-DESK-2", "Audio", 4599, 10, 3),
        seed_product("aa000006", "HDMI Cable 2m", "CBL-HDMI-2", "Cables", 899, 50, 15),
        seed_product("aa000007", "USB-C Cable 1m", "CBL-USBC-1", "Cables", 599, 60, 20),
        seed_product("aa000008", "External SSD 1TB", "SSD-EXT-1T", "Storage", 10999, 6, 2),
    ]
}

/// The seed client list.
pub fn seed_clients() -> Vec<Client> {
    let at = seed_time();
    let base = |suffix: &str, name: &str, email: &str, city: &str| Client {
        id: format!("{}-{suffix}", SEED_UNIX_SECONDS * 1000),
        name: name.to_string(),
        email: Some(email.to_string()),
        phone: None,
        address: None,
        city: Some(city.to_string()),
        country: None,
        tax_id: None,
        notes: None,
        created_at: at,
        updated_at: at,
    };

    vec![
        base("bb000001", "Ana Torres", "ana.torres@example.com", "Lima"),
        base("bb000002", "Bruno Vega", "bruno.vega@example.com", "Quito"),
        base("bb000003", "Carla Mendez", "carla.mendez@example.com", "Bogota"),
    ]
}

/// The seed supplier list.
pub fn seed_suppliers() -> Vec<Supplier> {
    let at = seed_time();
    let base = |suffix: &str, name: &str, contact: &str, email: &str, phone: &str| Supplier {
        id: format!("{}-{suffix}", SEED_UNIX_SECONDS * 1000),
        name: name.to_string(),
        contact_name: contact.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: None,
        city: None,
        country: None,
        notes: None,
        created_at: at,
        updated_at: at,
    };

    vec![
        base(
            "cc000001",
            "TechParts Wholesale",
            "Diego Ruiz",
            "orders@techparts.example.com",
            "555-0100",
        ),
        base(
            "cc000002",
            "Andes Electronics Supply",
            "Elena Paredes",
            "sales@andes-elec.example.com",
            "555-0142",
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_products(), seed_products());
        assert_eq!(seed_clients(), seed_clients());
        assert_eq!(seed_suppliers(), seed_suppliers());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let products = seed_products();
        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_stock_is_healthy() {
        // No seed product starts below its threshold.
        assert!(seed_products().iter().all(|p| !p.is_low_stock()));
    }
}
