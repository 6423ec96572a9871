//! VaxTag GS1 codec
//!
//! Deterministic, reversible encoding between a vaccine dose record (GTIN,
//! batch, expiry, serial) and the single delimited text string carried in a
//! QR code, plus the validation rules that gate encoding.
//!
//! Four GS1 Application Identifiers are handled:
//!
//! - `(01)` — GTIN, 14 digits (left-zero-padded on encode)
//! - `(10)` — batch/lot number, alphanumeric, max 20 characters
//! - `(17)` — expiry date, `YYMMDD`
//! - `(21)` — serial number, alphanumeric, max 20 characters
//!
//! Everything in this crate is pure and synchronous: no I/O, no shared
//! state, safe to call concurrently. Bad input is reported through return
//! values, never through panics.

pub mod decode;
pub mod encode;
pub mod error;
pub mod record;
pub mod validate;

pub use decode::{Decoded, decode, decode_safe, extract_serial, is_valid_format, parse_expiry};
pub use encode::{Encoded, encode, encode_safe, encode_safe_as_of, format_expiry, pad_gtin};
pub use error::{DecodeError, EncodeError};
pub use record::Gs1Data;
pub use validate::{validate, validate_as_of};
