//! Request validation utilities for consistent validation across handlers

use crate::error::ApiError;

/// Trait for validating request payloads before they reach a service.
///
/// Implement this for all create/update request types so validation errors
/// carry consistent messages.
pub trait RequestValidation {
    /// Returns `Ok(())` if validation passes, or `Err(ApiError)` with a
    /// validation error message otherwise.
    fn validate(&self) -> Result<(), ApiError>;
}

/// Validate a field with a custom predicate
#[macro_export]
macro_rules! validate_field {
    ($field:expr, $predicate:expr, $message:expr) => {
        if !$predicate {
            return Err($crate::error::ApiError::validation($message));
        }
    };
}

/// Validate a required (non-empty after trim) string field
#[macro_export]
macro_rules! validate_required {
    ($field:expr, $message:expr) => {
        validate_field!($field, !$field.trim().is_empty(), $message);
    };
}

/// Validate string length bounds
#[macro_export]
macro_rules! validate_length {
    ($field:expr, $min:expr, $max:expr, $message:expr) => {
        let len = $field.len();
        validate_field!($field, len >= $min && len <= $max, $message);
    };
}
