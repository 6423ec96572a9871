//! Generate QR Code Handler

use std::sync::Arc;

use jiff::civil::Date;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vaxtag_app::domain::qr_codes::data::NewQrCode;
use vaxtag_gs1::{Gs1Data, encode_safe};

use crate::{
    extensions::*,
    qr_codes::{errors::into_status_error, get::QrCodeResponse},
    qr_image,
    state::State,
};

/// Generate QR Code Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct GenerateQrRequest {
    /// Global Trade Item Number, up to 14 digits
    pub gtin: String,

    /// Batch/lot number, 1-20 alphanumeric characters
    pub batch: String,

    /// Expiry date in `YYYY-MM-DD` form
    pub expiry: String,

    /// Unique serial number, 1-20 alphanumeric characters
    pub serial: String,

    /// Email of the creator
    pub created_by: Option<String>,
}

impl From<&GenerateQrRequest> for Gs1Data {
    fn from(request: &GenerateQrRequest) -> Self {
        Gs1Data {
            gtin: request.gtin.clone(),
            batch: request.batch.clone(),
            expiry: request.expiry.clone(),
            serial: request.serial.clone(),
        }
    }
}

/// Generate QR Code Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GenerateQrResponse {
    /// Always true; failures are reported as status errors
    pub success: bool,

    /// The persisted QR code record
    pub data: QrCodeResponse,

    /// The rendered QR image as an inline data URL
    pub qr_image_url: String,
}

/// Generate QR Code Handler
#[endpoint(
    tags("qr"),
    summary = "Generate QR Code",
    responses(
        (status_code = StatusCode::CREATED, description = "QR code generated"),
        (status_code = StatusCode::CONFLICT, description = "Serial number already used"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::TOO_MANY_REQUESTS, description = "Rate limit exceeded"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<GenerateQrRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<GenerateQrResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let encoded = encode_safe(&Gs1Data::from(&request));

    if !encoded.errors.is_empty() {
        return Err(StatusError::bad_request().brief(encoded.errors.join(", ")));
    }

    // encode_safe only succeeds when the expiry parses.
    let expiry: Date = request
        .expiry
        .parse()
        .or_500("validated expiry failed to parse")?;

    let qr_image_url =
        qr_image::render_svg_data_url(&encoded.qr_data).or_500("failed to render qr image")?;

    let record = state
        .app
        .qr_codes
        .create_qr_code(NewQrCode {
            gtin: request.gtin,
            batch: request.batch,
            expiry,
            serial: request.serial,
            qr_data: encoded.qr_data,
            created_by: request.created_by,
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/qr/{}", record.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(GenerateQrResponse {
        success: true,
        data: record.into(),
        qr_image_url,
    }))
}
