//! Core item catalog logic
//!
//! This module contains the pure, synchronous domain rules of the catalog.
//! It provides:
//!
//! - [`item`]: The catalog item record and its derived prices
//! - [`natural`]: Human-friendly string ordering ("Item 2" before "Item 10")
//! - [`ordering`]: Sort fields, directions and item comparison
//! - [`durability`]: Wear rounding, price compensation and name suffixes
//! - [`normalize`]: Icon filename to item label conversion
//! - [`suggestions`]: Name suggestions built from an icon folder
//! - [`catalog`]: Duplicate detection, durability buckets and filtering
//! - [`error`]: Error types for catalog operations

pub mod catalog;
pub mod durability;
pub mod error;
pub mod item;
pub mod natural;
pub mod normalize;
pub mod ordering;
pub mod suggestions;

#[cfg(test)]
pub mod test_helpers;

#[cfg(test)]
mod tests;
