//! The dose record exchanged with the codec.

use serde::{Deserialize, Serialize};

/// A vaccine dose record, the unit the codec encodes and decodes.
///
/// All four fields are plain strings; `expiry` is an ISO `YYYY-MM-DD` date.
/// Deserialization fills absent fields with empty strings so a partially
/// populated payload (for example, live form feedback) can be validated
/// without a separate "draft" type — [`crate::validate`] treats an empty
/// field as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gs1Data {
    /// Global Trade Item Number, up to 14 decimal digits.
    pub gtin: String,

    /// Batch/lot number, 1-20 alphanumeric characters.
    pub batch: String,

    /// Expiry date in `YYYY-MM-DD` form.
    pub expiry: String,

    /// Per-item serial number, 1-20 alphanumeric characters.
    pub serial: String,
}
