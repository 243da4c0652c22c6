//! End-to-end flow over a real data directory: seed, sell, order and
//! receive, adjust, then reset, checking the cross-store effects and
//! that everything survives a reopen from disk.

use stockbook_core::metrics;
use stockbook_core::{
    Money, MovementKind, NewProduct, PaymentMethod, PurchaseDraft, PurchaseLine, SaleDraft,
    SaleLine,
};
use stockbook_store::{seed, Inventory, StoreConfig};

fn sale_of(product_id: &str, quantity: i64) -> SaleDraft {
    SaleDraft {
        lines: vec![SaleLine {
            product_id: product_id.to_string(),
            quantity,
        }],
        payment_method: PaymentMethod::Card,
        client_name: Some("Ana Torres".to_string()),
        client_email: None,
    }
}

#[test]
fn full_lifecycle_and_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = StoreConfig::new(dir.path());

    let keyboard_id;
    let purchase_id;
    {
        let mut inventory = Inventory::open(config.clone()).expect("open");
        inventory.reset_all().expect("seed");

        let keyboard = inventory
            .products()
            .find_by_sku("KB-MECH-87")
            .expect("seed product")
            .clone();
        keyboard_id = keyboard.id.clone();

        // Sell 3 keyboards.
        let sale = inventory.record_sale(sale_of(&keyboard.id, 3)).expect("sale");
        assert_eq!(sale.total, keyboard.price.multiply_quantity(3));
        assert_eq!(
            inventory.products().get(&keyboard.id).unwrap().stock,
            keyboard.stock - 3
        );

        // Order 10 more from the first supplier and receive them.
        let supplier_id = inventory.suppliers().all()[0].id.clone();
        let purchase = inventory
            .record_purchase(PurchaseDraft {
                supplier_id,
                lines: vec![PurchaseLine {
                    product_id: keyboard.id.clone(),
                    quantity: 10,
                    unit_cost: Money::from_cents(4500),
                }],
            })
            .expect("purchase");
        purchase_id = purchase.id.clone();

        inventory.receive_purchase(&purchase.id).expect("receive");
        assert_eq!(
            inventory.products().get(&keyboard.id).unwrap().stock,
            keyboard.stock - 3 + 10
        );

        // Manual correction after a recount.
        inventory
            .adjust_stock(&keyboard.id, -1, Some("damaged unit".to_string()))
            .expect("adjust");

        // The movement log saw all three kinds, newest first.
        let kinds: Vec<MovementKind> = inventory
            .movements()
            .recent(10)
            .iter()
            .map(|m| m.kind)
            .collect();
        assert_eq!(kinds.len(), 3);
        assert!(kinds.contains(&MovementKind::Sale));
        assert!(kinds.contains(&MovementKind::Purchase));
        assert!(kinds.contains(&MovementKind::Adjustment));
    }

    // Everything above came from snapshots; a fresh process sees it all.
    {
        let mut inventory = Inventory::open(config.clone()).expect("reopen");

        assert_eq!(inventory.sales().len(), 1);
        assert_eq!(inventory.sales().for_client("ana torres").len(), 1);
        assert_eq!(
            inventory.purchases().get(&purchase_id).unwrap().status,
            stockbook_core::PurchaseStatus::Received
        );
        assert_eq!(inventory.movements().for_product(&keyboard_id).len(), 3);

        // Dashboard numbers are derivable straight off the stores.
        let revenue = metrics::total_revenue(inventory.sales().all());
        assert_eq!(revenue, inventory.sales().total_revenue());
        assert!(!metrics::inventory_value_by_category(inventory.products().all()).is_empty());

        // An interim product, then reset: back to the exact seed.
        inventory
            .products_mut()
            .add(NewProduct {
                name: "Interim Gadget".to_string(),
                sku: "TMP-1".to_string(),
                category: "Misc".to_string(),
                price: Money::from_cents(100),
                stock: 1,
                min_stock: 0,
                description: None,
                image: None,
            })
            .expect("add");

        inventory.reset_all().expect("reset");
        assert_eq!(inventory.products().all(), &seed::seed_products()[..]);
        assert!(inventory.sales().is_empty());
        assert!(inventory.movements().is_empty());
    }

    // And the reset state is what a third open reads back.
    {
        let inventory = Inventory::open(config).expect("third open");
        assert_eq!(inventory.products().all(), &seed::seed_products()[..]);
        assert_eq!(inventory.clients().all(), &seed::seed_clients()[..]);
    }
}

#[test]
fn failed_sale_leaves_no_trace_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = StoreConfig::new(dir.path());

    let mut inventory = Inventory::open(config.clone()).expect("open");
    inventory.reset_all().expect("seed");

    let ssd = inventory
        .products()
        .find_by_sku("SSD-EXT-1T")
        .expect("seed product")
        .clone();

    // Stock is 6; asking for 7 must fail before anything is written.
    assert!(inventory.record_sale(sale_of(&ssd.id, 7)).is_err());

    let reopened = Inventory::open(config).expect("reopen");
    assert_eq!(reopened.products().get(&ssd.id).unwrap().stock, ssd.stock);
    assert!(reopened.sales().is_empty());
    assert!(reopened.movements().is_empty());
}
