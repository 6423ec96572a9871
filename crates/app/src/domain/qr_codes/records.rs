//! QR Code Records

use jiff::{Timestamp, civil::Date};

use crate::uuids::TypedUuid;

/// QR Code UUID
pub type QrCodeUuid = TypedUuid<QrCodeRecord>;

/// QR Code Record
///
/// One generated code: the validated dose fields plus the canonical wire
/// string (`qr_data`) that was rendered into the QR image. The serial is
/// unique across all codes and is the scan-side lookup key.
#[derive(Debug, Clone)]
pub struct QrCodeRecord {
    pub uuid: QrCodeUuid,
    pub gtin: String,
    pub batch: String,
    pub expiry: Date,
    pub serial: String,
    pub qr_data: String,
    pub created_at: Timestamp,
    pub created_by: Option<String>,
}
