//! Field rules for user payloads.

use axum_helpers::{FieldViolations, field_violations};
use validator::Validate;

use crate::models::UserPayload;

/// Check a payload against the user rules; empty means acceptable.
///
/// Email uniqueness needs the store and is checked by the service.
pub fn violations(payload: &UserPayload) -> FieldViolations {
    match payload.validate() {
        Ok(()) => FieldViolations::new(),
        Err(errors) => field_violations(&errors),
    }
}
