//! Record Scan Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vaxtag_app::domain::scans::{data::NewScan, records::ScanWithQrCode};
use vaxtag_gs1::extract_serial;

use crate::{extensions::*, scans::errors::into_status_error, state::State};

/// Record Scan Request
///
/// Scanners submit either the serial they decoded locally or the raw wire
/// string exactly as read from the QR code.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct RecordScanRequest {
    /// The serial number of the scanned code
    pub serial: String,

    /// The raw GS1 wire string, used when no serial is supplied
    pub qr_data: String,

    /// Email of the scanning user
    pub scanned_by: String,

    /// Free-form device description
    pub device_info: Option<String>,
}

/// The scanned QR code as echoed back to the scanner
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ScannedQrCode {
    /// The unique identifier of the QR code
    pub uuid: Uuid,

    /// The GTIN as submitted at generation time
    pub gtin: String,

    /// The batch/lot number
    pub batch: String,

    /// The expiry date in `YYYY-MM-DD` form
    pub expiry: String,

    /// The serial number
    pub serial: String,

    /// The full GS1 wire string
    pub qr_data: String,
}

/// Scan Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ScanResponse {
    /// The unique identifier of the scan event
    pub uuid: Uuid,

    /// The QR code that was scanned
    pub qr_code: ScannedQrCode,

    /// Email of the scanning user
    pub scanned_by: String,

    /// When the scan was recorded
    pub scanned_at: String,

    /// Free-form device description
    pub device_info: Option<String>,
}

impl From<ScanWithQrCode> for ScanResponse {
    fn from(scan: ScanWithQrCode) -> Self {
        ScanResponse {
            uuid: scan.scan.uuid.into_uuid(),
            qr_code: ScannedQrCode {
                uuid: scan.qr_code.uuid.into_uuid(),
                gtin: scan.qr_code.gtin,
                batch: scan.qr_code.batch,
                expiry: scan.qr_code.expiry.to_string(),
                serial: scan.qr_code.serial,
                qr_data: scan.qr_code.qr_data,
            },
            scanned_by: scan.scan.scanned_by,
            scanned_at: scan.scan.scanned_at.to_string(),
            device_info: scan.scan.device_info,
        }
    }
}

/// Serial may arrive directly or inside a scanned wire string.
fn resolve_serial(request: &RecordScanRequest) -> Result<String, StatusError> {
    if !request.serial.is_empty() {
        return Ok(request.serial.clone());
    }

    if !request.qr_data.is_empty() {
        return extract_serial(&request.qr_data)
            .map(ToString::to_string)
            .ok_or_else(|| {
                StatusError::bad_request().brief("QR data does not contain a serial number")
            });
    }

    Err(StatusError::bad_request().brief("Serial number is required"))
}

/// Record Scan Handler
#[endpoint(
    tags("scans"),
    summary = "Record Scan",
    responses(
        (status_code = StatusCode::CREATED, description = "Scan recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RecordScanRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ScanResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let serial = resolve_serial(&request)?;

    if request.scanned_by.is_empty() {
        return Err(StatusError::bad_request().brief("Scanned by (user email) is required"));
    }

    let scan = state
        .app
        .scans
        .record_scan(NewScan {
            serial,
            scanned_by: request.scanned_by,
            device_info: request.device_info,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(scan.into()))
}
