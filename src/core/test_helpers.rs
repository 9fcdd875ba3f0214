//! Shared test utilities for core module tests
//!
//! This module is only compiled in test mode.

use crate::core::item::Item;

/// Creates a plain item: stack of 1, weight 1.0, no icon, no durability.
///
/// This is the canonical helper for building catalog fixtures.
pub fn create_test_item(name: &str, unit_price: f64) -> Item {
    Item::new(name, unit_price, 1, 1.0)
}

/// Creates an item carrying a durability reading.
///
/// The name is used verbatim, so tests can pair it with any suffix.
pub fn create_worn_item(name: &str, durability: u32, max_durability: u32) -> Item {
    let mut item = create_test_item(name, 10.0);
    item.durability = Some(durability);
    item.max_durability = Some(max_durability);
    item
}

/// Returns `item` with its icon path set.
pub fn with_icon(mut item: Item, icon_path: &str) -> Item {
    item.icon_path = Some(icon_path.to_string());
    item
}

/// A small catalog covering natural ordering, durability and icons.
#[allow(dead_code)] // Used by cross-module scenarios in core::tests
pub fn sample_catalog() -> Vec<Item> {
    vec![
        with_icon(
            Item::new("Item 10", 2.0, 10, 0.5),
            "/icons/Item10.png",
        ),
        Item::new("Item 2", 5.0, 1, 2.0),
        create_worn_item("Iron Axe 55%", 57, 100),
        Item::new("axe", 1.0, 5, 1.0),
    ]
}
