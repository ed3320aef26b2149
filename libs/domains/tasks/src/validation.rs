//! Field rules for task payloads.

use axum_helpers::{FieldViolations, field_violations};
use validator::Validate;

use crate::models::TaskPayload;

/// Check a payload against the task rules.
///
/// - `title`: not blank, 3 to 100 characters
/// - `description`: at most 500 characters when present
/// - `status`: present
///
/// An empty map means the payload is acceptable.
pub fn violations(payload: &TaskPayload) -> FieldViolations {
    match payload.validate() {
        Ok(()) => FieldViolations::new(),
        Err(errors) => field_violations(&errors),
    }
}
