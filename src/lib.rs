//! itemtrack - game item catalog engine
//!
//! Domain rules for a catalog of in-game items: natural sorting, durability
//! rounding with price compensation, icon-name normalization, name
//! suggestions and catalog-wide checks.
//!
//! # Architecture
//!
//! - [`core`] - Pure catalog logic, no I/O
//! - [`forms`] - Add/edit form model with per-field errors
//! - [`validators`] - Field-level input validation
//! - [`config`] - Configuration loading
//! - [`utils`] - Data directories, catalog files and icon folders
//!
//! # Example
//!
//! ```
//! use itemtrack::core::ordering::{SortSpec, sort_items};
//! use itemtrack::Item;
//!
//! let mut items = vec![Item::new("Item 10", 1.0, 1, 1.0), Item::new("Item 2", 1.0, 1, 1.0)];
//! sort_items(&mut items, SortSpec::default());
//! assert_eq!(items[0].name, "Item 2");
//! ```

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_lifetimes)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod forms;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use core::catalog::DurabilityRangeBucket;
pub use core::durability::DurabilityResult;
pub use core::error::{Error, Result};
pub use core::item::Item;
pub use core::ordering::{SortDirection, SortField, SortSpec};
pub use core::suggestions::SuggestionIndex;
