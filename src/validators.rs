//! Input validation for item form fields
//!
//! Every validator takes the raw text of one field and returns the parsed
//! value or a message suitable for showing next to that field. Whitespace
//! around numbers is ignored.

/// Validates an item name.
///
/// # Examples
///
/// ```
/// use itemtrack::validators::validate_name;
///
/// assert_eq!(validate_name("  Iron Axe ").unwrap(), "Iron Axe");
/// assert!(validate_name("   ").is_err());
/// ```
///
/// # Errors
///
/// Returns `Err` if the name is blank.
pub fn validate_name(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Name is required".to_string());
    }
    Ok(trimmed.to_string())
}

fn parse_number(input: &str, field: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("{field} must be a number"))?;
    if !value.is_finite() {
        return Err(format!("{field} must be a finite number"));
    }
    Ok(value)
}

/// Validates a unit price.
///
/// # Errors
///
/// Returns `Err` if the price is not a finite number or is negative.
pub fn validate_unit_price(input: &str) -> Result<f64, String> {
    let price = parse_number(input, "Unit price")?;
    if price < 0.0 {
        return Err("Unit price cannot be negative".to_string());
    }
    Ok(price)
}

/// Validates a stack size.
///
/// # Errors
///
/// Returns `Err` if the stack size is not a whole number greater than zero.
pub fn validate_stack_size(input: &str) -> Result<u32, String> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(0) => Err("Stack size must be greater than zero".to_string()),
        Ok(size) => Ok(size),
        Err(_) if trimmed.parse::<i64>().is_ok_and(|n| n <= 0) => {
            Err("Stack size must be greater than zero".to_string())
        }
        Err(_) => Err("Stack size must be a whole number".to_string()),
    }
}

/// Validates the weight of a single item.
///
/// # Errors
///
/// Returns `Err` if the weight is not a finite number greater than zero.
pub fn validate_weight(input: &str) -> Result<f64, String> {
    let weight = parse_number(input, "Weight per item")?;
    if weight <= 0.0 {
        return Err("Weight per item must be greater than zero".to_string());
    }
    Ok(weight)
}

/// Validates an optional durability field (current or max).
///
/// Empty input means "not set". Range checks against the other field happen
/// in [`crate::core::durability::derive`].
///
/// # Errors
///
/// Returns `Err` if the input is neither empty nor a whole number.
pub fn validate_optional_durability(input: &str, field: &str) -> Result<Option<i64>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| format!("{field} must be a whole number"))
}
