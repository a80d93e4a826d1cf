//! Stock decrements from several threads against one shared catalog.

use std::thread;

use domain::{Money, Product, ProductId};
use store::{InMemoryProductCatalog, ProductRepository};

#[test]
fn concurrent_decrements_never_oversell() {
    let catalog = InMemoryProductCatalog::with_products([Product::new(
        "P001",
        "Laptop",
        Money::from_dollars(1200),
        10,
    )]);
    let id = ProductId::new("P001");

    let successes: usize = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let catalog = catalog.clone();
                let id = id.clone();
                s.spawn(move || {
                    (0..5)
                        .filter(|_| catalog.decrement_stock(&id, 1).is_ok())
                        .count()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(successes, 10);
    assert_eq!(catalog.get_product(&id).unwrap().stock_quantity(), 0);
}

#[test]
fn failed_decrement_from_one_handle_is_invisible_to_another() {
    let catalog = InMemoryProductCatalog::with_products([Product::new(
        "P003",
        "Headphones",
        Money::from_dollars(150),
        2,
    )]);
    let other = catalog.clone();
    let id = ProductId::new("P003");

    assert!(catalog.decrement_stock(&id, 3).is_err());
    assert_eq!(other.get_product(&id).unwrap().stock_quantity(), 2);
}
