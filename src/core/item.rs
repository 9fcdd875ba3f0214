//! Catalog item data structure
//!
//! An [`Item`] mirrors one entry of the catalog JSON file field for field.
//! Everything else about an item (price per stack, price per kg, wear
//! percentage) is derived on demand and never stored.
//!
//! # Example
//!
//! ```
//! use itemtrack::core::item::Item;
//!
//! let mut item = Item::new("Iron Axe", 12.5, 4, 2.5);
//! item.durability = Some(57);
//! item.max_durability = Some(100);
//!
//! assert_eq!(item.price_per_stack(), 50.0);
//! assert_eq!(item.price_per_kg(), 5.0);
//! assert_eq!(item.rounded_durability_percentage(), Some(55));
//! ```

use crate::core::durability;
use serde::{Deserialize, Serialize};
use crate::utils::path_file_name;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default = "default_stack_size")]
    pub stack_size: u32,
    #[serde(default = "default_weight")]
    pub weight_per_item: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
    /// Current durability; present only together with `max_durability`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durability: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_durability: Option<u32>,
}

fn default_stack_size() -> u32 {
    1
}

fn default_weight() -> f64 {
    1.0
}

impl Item {
    /// Creates an item without icon or durability.
    pub fn new(name: impl Into<String>, unit_price: f64, stack_size: u32, weight_per_item: f64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            stack_size,
            weight_per_item,
            icon_path: None,
            durability: None,
            max_durability: None,
        }
    }

    pub fn price_per_stack(&self) -> f64 {
        self.unit_price * f64::from(self.stack_size)
    }

    pub fn price_per_kg(&self) -> f64 {
        if self.weight_per_item > 0.0 {
            self.unit_price / self.weight_per_item
        } else {
            0.0
        }
    }

    /// Wear percentage clamped to 0-100, or `None` without durability data.
    pub fn durability_percentage(&self) -> Option<f64> {
        match (self.durability, self.max_durability) {
            (Some(current), Some(max)) if max > 0 => {
                Some(durability::raw_percentage(i64::from(current), i64::from(max)))
            }
            _ => None,
        }
    }

    pub fn rounded_durability_percentage(&self) -> Option<u8> {
        self.durability_percentage()
            .map(durability::round_to_nearest_5)
    }

    /// File name component of the icon path (no directories).
    pub fn icon_file_name(&self) -> Option<&str> {
        self.icon_path.as_deref().and_then(path_file_name)
    }
}
