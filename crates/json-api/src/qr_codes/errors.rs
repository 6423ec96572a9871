//! QR Code Errors

use salvo::http::StatusError;
use tracing::error;

use vaxtag_app::domain::qr_codes::QrCodesServiceError;

pub(crate) fn into_status_error(error: QrCodesServiceError) -> StatusError {
    match error {
        QrCodesServiceError::SerialTaken => StatusError::conflict()
            .brief("Serial number already used. Please use a different serial number."),
        QrCodesServiceError::NotFound => StatusError::not_found().brief("QR code not found"),
        QrCodesServiceError::InvalidReference
        | QrCodesServiceError::MissingRequiredData
        | QrCodesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid QR code payload")
        }
        QrCodesServiceError::Sql(source) => {
            error!("qr codes storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
