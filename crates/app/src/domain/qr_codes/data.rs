//! QR Codes Data

use jiff::civil::Date;

/// New QR Code Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQrCode {
    pub gtin: String,
    pub batch: String,
    pub expiry: Date,
    pub serial: String,
    pub qr_data: String,
    pub created_by: Option<String>,
}
