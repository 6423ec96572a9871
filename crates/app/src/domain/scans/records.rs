//! Scan Event Records

use jiff::Timestamp;

use crate::{
    domain::qr_codes::records::{QrCodeRecord, QrCodeUuid},
    uuids::TypedUuid,
};

/// Scan Event UUID
pub type ScanUuid = TypedUuid<ScanRecord>;

/// Scan Event Record
#[derive(Debug, Clone)]
pub struct ScanRecord {
    pub uuid: ScanUuid,
    pub qr_code_uuid: QrCodeUuid,
    pub scanned_by: String,
    pub scanned_at: Timestamp,
    pub device_info: Option<String>,
}

/// A scan event joined with the QR code it belongs to, the shape the feed
/// and dashboard endpoints return.
#[derive(Debug, Clone)]
pub struct ScanWithQrCode {
    pub scan: ScanRecord,
    pub qr_code: QrCodeRecord,
}

/// Scan Statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub total_scans: i64,
    pub scans_today: i64,
    pub total_qr_codes: i64,
}
