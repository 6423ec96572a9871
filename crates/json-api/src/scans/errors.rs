//! Scan Event Errors

use salvo::http::StatusError;
use tracing::error;

use vaxtag_app::domain::scans::ScansServiceError;

pub(crate) fn into_status_error(error: ScansServiceError) -> StatusError {
    match error {
        ScansServiceError::UnknownSerial(serial) => {
            StatusError::bad_request().brief(format!("QR code with serial '{serial}' not found"))
        }
        ScansServiceError::NotFound => StatusError::not_found().brief("Scan event not found"),
        ScansServiceError::InvalidReference
        | ScansServiceError::MissingRequiredData
        | ScansServiceError::InvalidData => StatusError::bad_request().brief("Invalid scan payload"),
        ScansServiceError::Time(source) => {
            error!("failed to compute stats window: {source}");

            StatusError::internal_server_error()
        }
        ScansServiceError::Sql(source) => {
            error!("scans storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
