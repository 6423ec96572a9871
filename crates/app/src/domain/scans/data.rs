//! Scan Events Data

/// New Scan Event Data
///
/// The serial is the lookup key: scanners submit the serial they read, not
/// the QR code's database identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScan {
    pub serial: String,
    pub scanned_by: String,
    pub device_info: Option<String>,
}
