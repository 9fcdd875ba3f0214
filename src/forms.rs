//! Item form validation
//!
//! Holds the raw text of the add/edit form and turns it into an [`Item`]
//! with per-field error reporting. Durability is previewed live while the
//! user types, and the final name always carries the rounded durability
//! suffix.

use crate::core::catalog::find_duplicate;
use crate::core::durability::{self, DurabilityResult};
use crate::core::error::Error;
use crate::core::item::Item;
use crate::core::suggestions::{SuggestionIndex, best_matching_item};
use crate::validators;

/// Form validation errors for individual fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub unit_price: Option<String>,
    pub stack_size: Option<String>,
    pub weight_per_item: Option<String>,
    pub durability: Option<String>,
    pub max_durability: Option<String>,
}

/// Item form state with validation
///
/// Numeric fields are kept as text so half-typed input survives redraws.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub unit_price: String,
    pub stack_size: String,
    pub weight_per_item: String,
    pub icon_path: Option<String>,
    pub durability: String,
    pub max_durability: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            unit_price: String::new(),
            stack_size: "1".to_string(),
            weight_per_item: "1.0".to_string(),
            icon_path: None,
            durability: String::new(),
            max_durability: String::new(),
        }
    }
}

/// Field values that passed validation
struct ParsedFields {
    name: String,
    unit_price: f64,
    stack_size: u32,
    weight_per_item: f64,
    durability: DurabilityResult,
    durability_values: Option<(u32, u32)>,
}

fn record<T>(result: Result<T, String>, slot: &mut Option<String>, has_errors: &mut bool) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(msg) => {
            *slot = Some(msg);
            *has_errors = true;
            None
        }
    }
}

impl ItemForm {
    /// Fills the form from an existing item for editing.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            unit_price: format!("{:.2}", item.unit_price),
            stack_size: item.stack_size.to_string(),
            weight_per_item: format!("{:.3}", item.weight_per_item),
            icon_path: item.icon_path.clone(),
            durability: item.durability.map(|d| d.to_string()).unwrap_or_default(),
            max_durability: item
                .max_durability
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }

    /// Validates all form fields
    ///
    /// Returns Option<FormErrors> - None if validation passed
    pub fn validate(&self) -> Option<FormErrors> {
        self.parse().err()
    }

    fn parse(&self) -> Result<ParsedFields, FormErrors> {
        let mut errors = FormErrors::default();
        let mut has_errors = false;

        let name = record(
            validators::validate_name(&self.name),
            &mut errors.name,
            &mut has_errors,
        );
        let unit_price = record(
            validators::validate_unit_price(&self.unit_price),
            &mut errors.unit_price,
            &mut has_errors,
        );
        let stack_size = record(
            validators::validate_stack_size(&self.stack_size),
            &mut errors.stack_size,
            &mut has_errors,
        );
        let weight_per_item = record(
            validators::validate_weight(&self.weight_per_item),
            &mut errors.weight_per_item,
            &mut has_errors,
        );
        let durability = self.validate_durability(&mut errors, &mut has_errors);

        match (name, unit_price, stack_size, weight_per_item, durability) {
            (
                Some(name),
                Some(unit_price),
                Some(stack_size),
                Some(weight_per_item),
                Some((durability, durability_values)),
            ) if !has_errors => Ok(ParsedFields {
                name,
                unit_price,
                stack_size,
                weight_per_item,
                durability,
                durability_values,
            }),
            _ => Err(errors),
        }
    }

    fn validate_durability(
        &self,
        errors: &mut FormErrors,
        has_errors: &mut bool,
    ) -> Option<(DurabilityResult, Option<(u32, u32)>)> {
        let current = record(
            validators::validate_optional_durability(&self.durability, "Durability"),
            &mut errors.durability,
            has_errors,
        );
        let max = record(
            validators::validate_optional_durability(&self.max_durability, "Max durability"),
            &mut errors.max_durability,
            has_errors,
        );
        let (current, max) = (current?, max?);

        let result = match durability::derive(current, max) {
            Ok(result) => result,
            Err(Error::InvalidDurabilityRange { max_durability, .. }) if max_durability <= 0 => {
                errors.max_durability = Some("Max durability must be greater than zero".to_string());
                *has_errors = true;
                return None;
            }
            Err(e) => {
                errors.durability = Some(e.translate().user_message);
                *has_errors = true;
                return None;
            }
        };

        let values = match (current, max) {
            (Some(current), Some(max)) => {
                match (u32::try_from(current), u32::try_from(max)) {
                    (Ok(current), Ok(max)) => Some((current, max)),
                    _ => {
                        errors.durability = Some("Durability value is too large".to_string());
                        *has_errors = true;
                        return None;
                    }
                }
            }
            _ => None,
        };

        Some((result, values))
    }

    /// Live durability readout; `None` while the fields are empty or invalid.
    pub fn durability_preview(&self) -> Option<DurabilityResult> {
        let current = validators::validate_optional_durability(&self.durability, "Durability").ok()?;
        let max =
            validators::validate_optional_durability(&self.max_durability, "Max durability").ok()?;
        durability::derive(current, max)
            .ok()
            .filter(|result| !result.is_none())
    }

    /// Unit price with the durability price multiplier applied.
    ///
    /// Shown as a hint only; [`ItemForm::to_item`] stores the price as typed.
    pub fn adjusted_unit_price(&self) -> Option<f64> {
        let price = validators::validate_unit_price(&self.unit_price).ok()?;
        Some(
            self.durability_preview()
                .map_or(price, |result| result.adjust_price(price)),
        )
    }

    /// Fills the form from a chosen name suggestion.
    ///
    /// Sets the name and the label's icon, then copies stack size, weight and
    /// max durability from the best matching catalog item. Returns `true` if
    /// such a template item was found.
    pub fn apply_suggestion(&mut self, label: &str, index: &SuggestionIndex, catalog: &[Item]) -> bool {
        self.name = label.to_string();
        if let Some(icon) = index.resolve_icon(label) {
            self.icon_path = Some(icon.to_string());
        }

        let Some(template) = best_matching_item(label, catalog, self.icon_path.as_deref()) else {
            tracing::debug!("No template item for suggestion '{label}'");
            return false;
        };

        self.stack_size = template.stack_size.to_string();
        self.weight_per_item = format!("{:.3}", template.weight_per_item);
        if let Some(max) = template.max_durability {
            self.max_durability = max.to_string();
        }
        true
    }

    /// Validates the form and builds the item to store.
    ///
    /// `editing` is the catalog index of the item being edited, if any.
    ///
    /// # Errors
    ///
    /// Returns the field errors, including a name conflict with another item.
    pub fn to_item(&self, catalog: &[Item], editing: Option<usize>) -> Result<Item, FormErrors> {
        let fields = self.parse()?;
        let name = fields.durability.canonical_name(&fields.name);

        if let Some(existing) = find_duplicate(catalog, &name, editing) {
            return Err(FormErrors {
                name: Some(format!("An item named '{}' already exists", existing.name)),
                ..FormErrors::default()
            });
        }

        let mut item = Item::new(
            name,
            fields.unit_price,
            fields.stack_size,
            fields.weight_per_item,
        );
        item.icon_path = self.icon_path.clone().filter(|p| !p.trim().is_empty());
        if let Some((current, max)) = fields.durability_values {
            item.durability = Some(current);
            item.max_durability = Some(max);
        }
        Ok(item)
    }
}
