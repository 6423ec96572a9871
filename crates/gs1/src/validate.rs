//! Validation rules gating encoding.
//!
//! Each field is checked independently in a fixed order (GTIN, batch,
//! expiry, serial) and short-circuits within the field: once a field fails
//! its empty check, no further checks run for it. The returned messages are
//! user-facing and displayed verbatim by the generator form.

use jiff::{Zoned, civil::Date};

use crate::record::Gs1Data;

/// Maximum GTIN length before padding.
pub const GTIN_MAX_LEN: usize = 14;

/// Maximum batch and serial length.
pub const TOKEN_MAX_LEN: usize = 20;

fn is_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

fn is_alphanumeric(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Validate a candidate record against today's wall-clock date.
///
/// Returns the list of validation failures, empty when the record is
/// acceptable for [`crate::encode`]. Missing fields are treated as empty.
#[must_use]
pub fn validate(data: &Gs1Data) -> Vec<String> {
    validate_as_of(data, Zoned::now().date())
}

/// Validate a candidate record against an explicit `today`.
///
/// The expiry "not in the past" rule is the codec's only time-dependent
/// behavior; taking `today` as a parameter keeps the function deterministic
/// and lets tests pin the clock. Comparison is at civil-date granularity:
/// an expiry of `today` itself is acceptable.
#[must_use]
pub fn validate_as_of(data: &Gs1Data, today: Date) -> Vec<String> {
    let mut errors = Vec::new();

    if data.gtin.is_empty() {
        errors.push("GTIN is required".to_string());
    } else if !is_digits(&data.gtin) {
        errors.push("GTIN must contain only digits".to_string());
    } else if data.gtin.len() > GTIN_MAX_LEN {
        errors.push("GTIN must be 14 digits or less".to_string());
    }

    if data.batch.is_empty() {
        errors.push("Batch number is required".to_string());
    } else if !is_alphanumeric(&data.batch) {
        errors.push("Batch must be alphanumeric only".to_string());
    } else if data.batch.len() > TOKEN_MAX_LEN {
        errors.push("Batch must be 20 characters or less".to_string());
    }

    if data.expiry.is_empty() {
        errors.push("Expiry date is required".to_string());
    } else {
        match data.expiry.parse::<Date>() {
            Err(_) => errors.push("Expiry must be a valid date".to_string()),
            Ok(expiry) if expiry < today => {
                errors.push("Expiry date cannot be in the past".to_string());
            }
            Ok(_) => {}
        }
    }

    if data.serial.is_empty() {
        errors.push("Serial number is required".to_string());
    } else if !is_alphanumeric(&data.serial) {
        errors.push("Serial must be alphanumeric only".to_string());
    } else if data.serial.len() > TOKEN_MAX_LEN {
        errors.push("Serial must be 20 characters or less".to_string());
    }

    errors
}
