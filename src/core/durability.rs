//! Durability rounding and price compensation
//!
//! Wear is shown in 5% steps. Rounding the shown value away from the real
//! one is compensated in price: every percentage point the bucket moves
//! changes the price by [`PRICE_ADJUSTMENT_PER_POINT`] percent.
//!
//! # Example
//!
//! ```
//! use itemtrack::core::durability::derive;
//!
//! let result = derive(Some(57), Some(100)).unwrap();
//! assert_eq!(result.rounded_percentage, Some(55));
//! assert_eq!(result.name_suffix.as_deref(), Some("55%"));
//! assert_eq!(result.canonical_name("Iron Axe 80%"), "Iron Axe 55%");
//! ```

use crate::core::error::{Error, Result};

/// Width of one displayed durability bucket, in percent.
pub const BUCKET_STEP: f64 = 5.0;

/// Price change per percentage point of rounding, in percent.
///
/// Kept exactly as the catalog has always priced items; see DESIGN.md.
pub const PRICE_ADJUSTMENT_PER_POINT: f64 = 2.5;

/// Rounding deltas at or below this are not reported in display text.
const DISPLAY_DELTA_EPSILON: f64 = 0.001;

/// Outcome of [`derive`] for one (durability, max durability) reading
#[derive(Debug, Clone, PartialEq)]
pub struct DurabilityResult {
    /// Unrounded wear percentage, clamped to 0-100
    pub percentage: Option<f64>,
    /// Percentage rounded to the nearest [`BUCKET_STEP`]
    pub rounded_percentage: Option<u8>,
    /// Display text, e.g. "55% (from 57.0%)"
    pub bucket_label: Option<String>,
    pub price_multiplier: f64,
    /// Suffix appended to the canonical item name, e.g. "55%"
    pub name_suffix: Option<String>,
}

impl DurabilityResult {
    /// Result for items that carry no durability at all.
    pub fn none() -> Self {
        Self {
            percentage: None,
            rounded_percentage: None,
            bucket_label: None,
            price_multiplier: 1.0,
            name_suffix: None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.percentage.is_none()
    }

    /// Shown minus real percentage (negative when the bucket rounds down).
    pub fn rounding_delta(&self) -> Option<f64> {
        match (self.rounded_percentage, self.percentage) {
            (Some(rounded), Some(raw)) => Some(f64::from(rounded) - raw),
            _ => None,
        }
    }

    pub fn adjust_price(&self, price: f64) -> f64 {
        price * self.price_multiplier
    }

    /// Replaces any trailing `" <digits>%"` in `base` with this result's suffix.
    ///
    /// Without durability the trimmed base name is returned as is. Applying
    /// the derivation to its own output yields the same name.
    pub fn canonical_name(&self, base: &str) -> String {
        let Some(suffix) = &self.name_suffix else {
            return base.trim().to_string();
        };

        let stem = strip_durability_suffix(base);
        if stem.is_empty() {
            suffix.clone()
        } else {
            format!("{stem} {suffix}")
        }
    }
}

/// Clamped wear percentage. `max` must be positive.
pub fn raw_percentage(current: i64, max: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let pct = current as f64 * 100.0 / max as f64;
    pct.clamp(0.0, 100.0)
}

/// Rounds half away from zero to the nearest multiple of [`BUCKET_STEP`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_to_nearest_5(percentage: f64) -> u8 {
    ((percentage / BUCKET_STEP).round() * BUCKET_STEP).clamp(0.0, 100.0) as u8
}

/// Turns a raw durability reading into a rounded bucket, price multiplier
/// and name suffix.
///
/// # Errors
///
/// - [`Error::IncompleteDurability`] if only one value is present
/// - [`Error::InvalidDurabilityRange`] if `durability < 0` or `max <= 0`
pub fn derive(durability: Option<i64>, max_durability: Option<i64>) -> Result<DurabilityResult> {
    let (current, max) = match (durability, max_durability) {
        (None, None) => return Ok(DurabilityResult::none()),
        (Some(current), Some(max)) => (current, max),
        _ => return Err(Error::IncompleteDurability),
    };

    if current < 0 || max <= 0 {
        return Err(Error::InvalidDurabilityRange {
            durability: current,
            max_durability: max,
        });
    }

    let raw = raw_percentage(current, max);
    let rounded = round_to_nearest_5(raw);
    let delta = f64::from(rounded) - raw;
    let price_multiplier = 1.0 + delta * PRICE_ADJUSTMENT_PER_POINT / 100.0;

    let bucket_label = if delta.abs() > DISPLAY_DELTA_EPSILON {
        format!("{rounded}% (from {raw:.1}%)")
    } else {
        format!("{rounded}%")
    };

    Ok(DurabilityResult {
        percentage: Some(raw),
        rounded_percentage: Some(rounded),
        bucket_label: Some(bucket_label),
        price_multiplier,
        name_suffix: Some(format!("{rounded}%")),
    })
}

/// Splits `"Name 80%"` into `("Name ", "80")`.
///
/// The digits must be preceded by whitespace or start the string, so
/// `"Mk2%"` is not treated as a durability suffix.
fn split_percent_suffix(name: &str) -> Option<(&str, &str)> {
    let body = name.trim_end().strip_suffix('%')?;
    let digits_start = body
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(0, |(idx, c)| idx + c.len_utf8());

    let (prefix, digits) = body.split_at(digits_start);
    if digits.is_empty() {
        return None;
    }
    if !prefix.is_empty() && !prefix.ends_with(char::is_whitespace) {
        return None;
    }
    Some((prefix, digits))
}

/// Removes a trailing `" <digits>%"` and surrounding whitespace.
pub fn strip_durability_suffix(name: &str) -> &str {
    split_percent_suffix(name).map_or(name, |(prefix, _)| prefix).trim()
}

/// Percentage from a trailing `"<n>%"` token, e.g. `"Sword 80%"` -> 80.
pub fn parse_percent_suffix(name: &str) -> Option<u32> {
    split_percent_suffix(name).and_then(|(_, digits)| digits.parse().ok())
}
