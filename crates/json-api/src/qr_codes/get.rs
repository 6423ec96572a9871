//! Get QR Code Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vaxtag_app::domain::qr_codes::records::QrCodeRecord;

use crate::{extensions::*, qr_codes::errors::into_status_error, state::State};

/// QR Code Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QrCodeResponse {
    /// The unique identifier of the QR code
    pub uuid: Uuid,

    /// The GTIN as submitted, before zero-padding
    pub gtin: String,

    /// The batch/lot number
    pub batch: String,

    /// The expiry date in `YYYY-MM-DD` form
    pub expiry: String,

    /// The unique serial number
    pub serial: String,

    /// The full GS1 wire string encoded into the QR image
    pub qr_data: String,

    /// The date and time the code was generated
    pub created_at: String,

    /// Email of the creator, when supplied
    pub created_by: Option<String>,
}

impl From<QrCodeRecord> for QrCodeResponse {
    fn from(qr_code: QrCodeRecord) -> Self {
        QrCodeResponse {
            uuid: qr_code.uuid.into_uuid(),
            gtin: qr_code.gtin,
            batch: qr_code.batch,
            expiry: qr_code.expiry.to_string(),
            serial: qr_code.serial,
            qr_data: qr_code.qr_data,
            created_at: qr_code.created_at.to_string(),
            created_by: qr_code.created_by,
        }
    }
}

/// Get QR Code Handler
///
/// Returns a QR code by its identifier.
#[endpoint(tags("qr"), summary = "Get QR Code")]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<QrCodeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let qr_code = state
        .app
        .qr_codes
        .get_qr_code(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(qr_code.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vaxtag_app::domain::qr_codes::{MockQrCodesService, QrCodesServiceError};

    use crate::test_helpers::{make_qr_code, qr_codes_service};

    use super::*;

    fn make_service(repo: MockQrCodesService) -> Service {
        qr_codes_service(repo, Router::with_path("qr/{uuid}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let qr_code = make_qr_code("SN001");
        let uuid = qr_code.uuid;

        let mut repo = MockQrCodesService::new();

        repo.expect_get_qr_code()
            .once()
            .withf(move |requested| *requested == uuid)
            .return_once(move |_| Ok(qr_code));

        repo.expect_create_qr_code().never();
        repo.expect_find_by_serial().never();

        let mut res = TestClient::get(format!("http://example.com/qr/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: QrCodeResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.serial, "SN001");
        assert_eq!(body.expiry, "2099-12-31");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_qr_code_returns_404() -> TestResult {
        let qr_code = make_qr_code("SN001");
        let uuid = qr_code.uuid;

        let mut repo = MockQrCodesService::new();

        repo.expect_get_qr_code()
            .once()
            .withf(move |requested| *requested == uuid)
            .return_once(|_| Err(QrCodesServiceError::NotFound));

        repo.expect_create_qr_code().never();
        repo.expect_find_by_serial().never();

        let res = TestClient::get(format!("http://example.com/qr/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_malformed_uuid_returns_400() -> TestResult {
        let mut repo = MockQrCodesService::new();

        repo.expect_get_qr_code().never();
        repo.expect_create_qr_code().never();
        repo.expect_find_by_serial().never();

        let res = TestClient::get("http://example.com/qr/not-a-uuid")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
