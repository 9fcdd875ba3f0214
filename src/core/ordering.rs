//! Configurable item ordering
//!
//! A [`SortSpec`] picks one of four fields and a direction. Names use
//! [`natural_cmp`]; the numeric fields use `f64::total_cmp` on the derived
//! value. Descending reverses the ascending result rather than swapping the
//! operands, so ties stay ties in both directions and a stable sort keeps
//! their previous relative order.

use crate::core::error::{Error, Result};
use crate::core::item::Item;
use crate::core::natural::natural_cmp;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field an item list can be sorted by
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum SortField {
    #[default]
    #[strum(serialize = "Name")]
    Name,
    #[strum(serialize = "Unit Price")]
    UnitPrice,
    #[strum(serialize = "Price per Stack")]
    PricePerStack,
    #[strum(serialize = "Price per kg")]
    PricePerKg,
}

impl SortField {
    /// Parses a display name ("Unit Price", "price per kg", ...).
    pub fn parse(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| Error::InvalidField(name.to_string()))
    }

    fn numeric_value(self, item: &Item) -> f64 {
        match self {
            SortField::Name => 0.0,
            SortField::UnitPrice => item.unit_price,
            SortField::PricePerStack => item.price_per_stack(),
            SortField::PricePerKg => item.price_per_kg(),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    #[strum(serialize = "Ascending")]
    Ascending,
    #[strum(serialize = "Descending")]
    Descending,
}

impl SortDirection {
    pub fn parse(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| Error::InvalidDirection(name.to_string()))
    }
}

/// Field plus direction for one sort request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SortSpec {
    #[serde(default)]
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Builds a `SortSpec` from the display names used in the sort pickers.
    pub fn parse(field: &str, direction: &str) -> Result<Self> {
        Ok(Self::new(
            SortField::parse(field)?,
            SortDirection::parse(direction)?,
        ))
    }

    /// Status line shown after sorting, e.g. "Sorted by Unit Price (descending)".
    pub fn describe(&self) -> String {
        format!(
            "Sorted by {} ({})",
            self.field,
            self.direction.as_ref().to_lowercase()
        )
    }
}

/// Compares two items by `field`, then applies `direction`.
pub fn compare(field: SortField, direction: SortDirection, a: &Item, b: &Item) -> Ordering {
    let ascending = match field {
        SortField::Name => natural_cmp(&a.name, &b.name),
        _ => field.numeric_value(a).total_cmp(&field.numeric_value(b)),
    };

    match direction {
        SortDirection::Ascending => ascending,
        SortDirection::Descending => ascending.reverse(),
    }
}

/// String-keyed variant of [`compare`] for callers holding picker text.
///
/// # Errors
///
/// Returns [`Error::InvalidField`] or [`Error::InvalidDirection`] for names
/// outside the closed sets.
pub fn compare_by_name(field: &str, direction: &str, a: &Item, b: &Item) -> Result<Ordering> {
    let spec = SortSpec::parse(field, direction)?;
    Ok(compare(spec.field, spec.direction, a, b))
}

/// Stable in-place sort; ties keep their previous relative order.
pub fn sort_items(items: &mut [Item], spec: SortSpec) {
    items.sort_by(|a, b| compare(spec.field, spec.direction, a, b));
}
