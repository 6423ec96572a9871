//! Record → wire string encoding.

use jiff::{Zoned, civil::Date};

use crate::{error::EncodeError, record::Gs1Data, validate::validate_as_of};

/// Outcome of a validated encode: either a wire string, or the validation
/// failures that blocked it. `errors` non-empty implies `qr_data` is empty —
/// a record is never partially encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The canonical wire string, empty when validation failed.
    pub qr_data: String,

    /// Validation failures, empty on success.
    pub errors: Vec<String>,
}

/// Left-pad a GTIN with zeros to the canonical 14-digit width.
///
/// Padding an already-14-digit GTIN is a no-op; longer input is returned
/// unchanged (the validator rejects it before encoding).
#[must_use]
pub fn pad_gtin(gtin: &str) -> String {
    format!("{gtin:0>14}")
}

/// Convert a `YYYY-MM-DD` expiry into the 6-digit `YYMMDD` wire form.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidExpiry`] when the input is not a calendar
/// date.
pub fn format_expiry(expiry: &str) -> Result<String, EncodeError> {
    let date: Date = expiry
        .parse()
        .map_err(|_| EncodeError::InvalidExpiry(expiry.to_string()))?;

    Ok(format!(
        "{:02}{:02}{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    ))
}

/// Encode a record into the canonical wire string.
///
/// The caller is expected to have run [`crate::validate`] first; use
/// [`encode_safe`] for the combined operation. Output is ASCII and at most
/// 76 characters.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidExpiry`] when the expiry does not parse —
/// the one precondition violation that cannot produce a plausible-looking
/// wire string.
pub fn encode(data: &Gs1Data) -> Result<String, EncodeError> {
    let gtin = pad_gtin(&data.gtin);
    let expiry = format_expiry(&data.expiry)?;

    Ok(format!(
        "(01){gtin}(10){}(17){expiry}(21){}",
        data.batch, data.serial
    ))
}

/// Validate, then encode, against today's wall-clock date.
#[must_use]
pub fn encode_safe(data: &Gs1Data) -> Encoded {
    encode_safe_as_of(data, Zoned::now().date())
}

/// Validate, then encode, against an explicit `today`.
#[must_use]
pub fn encode_safe_as_of(data: &Gs1Data, today: Date) -> Encoded {
    let errors = validate_as_of(data, today);

    if !errors.is_empty() {
        return Encoded {
            qr_data: String::new(),
            errors,
        };
    }

    match encode(data) {
        Ok(qr_data) => Encoded {
            qr_data,
            errors: Vec::new(),
        },
        Err(error) => Encoded {
            qr_data: String::new(),
            errors: vec![error.to_string()],
        },
    }
}
