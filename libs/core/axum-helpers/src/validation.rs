//! Bridges the `validator` crate to the flat `field -> message` map that error
//! responses carry.

use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors};

/// Field name to the single message reported for it, ordered by field name.
///
/// An empty map means the input is acceptable.
pub type FieldViolations = BTreeMap<String, String>;

/// Error code shared by `not_blank` and validator's `required` rule.
pub const REQUIRED_CODE: &str = "required";

/// Reject strings that are empty or whitespace only.
///
/// Use with `#[validate(custom(function = "not_blank", message = "..."))]`.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED_CODE));
    }
    Ok(())
}

/// Collapse validator output to one message per field.
///
/// A missing value outranks every other rule on the same field, so `"  "` reports
/// "required" rather than a length problem. Errors without a message fall back
/// to their code.
pub fn field_violations(errors: &ValidationErrors) -> FieldViolations {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            let chosen = field_errors
                .iter()
                .find(|e| e.code == REQUIRED_CODE)
                .or_else(|| field_errors.first())?;

            let message = chosen
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| chosen.code.to_string());

            Some((field.to_string(), message))
        })
        .collect()
}
