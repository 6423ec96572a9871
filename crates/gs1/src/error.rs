//! Codec errors.

use thiserror::Error;

/// Errors produced when encoding a record into a wire string.
///
/// [`crate::encode`] assumes its input already passed validation, so the
/// only reachable failure is an expiry that does not parse as a calendar
/// date — reported rather than panicked on, since the precondition is not
/// enforced by the type system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The expiry field is not a `YYYY-MM-DD` calendar date.
    #[error("expiry {0:?} is not a valid YYYY-MM-DD date")]
    InvalidExpiry(String),
}

/// Errors produced when decoding a wire string back into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input was empty. Kept distinct from [`DecodeError::InvalidFormat`]
    /// so callers can tell "nothing scanned" from "scanned garbage".
    #[error("QR data is required")]
    Empty,

    /// The input does not match the anchored four-segment GS1 pattern.
    #[error("invalid GS1 format, expected (01)GTIN(10)BATCH(17)EXPIRY(21)SERIAL")]
    InvalidFormat,

    /// The expiry segment is not six decimal digits.
    #[error("invalid expiry segment {0:?}, expected YYMMDD")]
    InvalidExpiry(String),
}
