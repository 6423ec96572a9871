//! Scan Stats Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vaxtag_app::domain::scans::records::ScanStats;

use crate::{extensions::*, scans::errors::into_status_error, state::State};

/// Aggregate scan counters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ScanStatsBody {
    /// Scans recorded overall
    pub total_scans: i64,

    /// Scans recorded since UTC midnight
    pub scans_today: i64,

    /// QR codes generated overall
    pub total_qr_codes: i64,
}

impl From<ScanStats> for ScanStatsBody {
    fn from(stats: ScanStats) -> Self {
        ScanStatsBody {
            total_scans: stats.total_scans,
            scans_today: stats.scans_today,
            total_qr_codes: stats.total_qr_codes,
        }
    }
}

/// Scan Stats Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ScanStatsResponse {
    /// Always true; failures are reported as status errors
    pub success: bool,

    /// The aggregate counters
    pub stats: ScanStatsBody,
}

/// Scan Stats Handler
///
/// Returns dashboard counters: total scans, scans today, total QR codes.
#[endpoint(tags("scans"), summary = "Scan Stats")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ScanStatsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stats = state
        .app
        .scans
        .scan_stats(Timestamp::now())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ScanStatsResponse {
        success: true,
        stats: stats.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vaxtag_app::domain::scans::MockScansService;

    use crate::test_helpers::scans_service;

    use super::*;

    fn make_service(scans: MockScansService) -> Service {
        scans_service(scans, Router::with_path("scans/stats").get(handler))
    }

    #[tokio::test]
    async fn test_stats_returns_counters() -> TestResult {
        let mut scans = MockScansService::new();

        scans.expect_scan_stats().once().return_once(|_| {
            Ok(ScanStats {
                total_scans: 12,
                scans_today: 3,
                total_qr_codes: 7,
            })
        });

        scans.expect_record_scan().never();
        scans.expect_recent_scans().never();
        scans.expect_scans_for_user().never();

        let response: ScanStatsResponse = TestClient::get("http://example.com/scans/stats")
            .send(&make_service(scans))
            .await
            .take_json()
            .await?;

        assert!(response.success, "expected success flag");
        assert_eq!(response.stats.total_scans, 12);
        assert_eq!(response.stats.scans_today, 3);
        assert_eq!(response.stats.total_qr_codes, 7);

        Ok(())
    }

    #[tokio::test]
    async fn test_stats_passes_current_time() -> TestResult {
        let before = Timestamp::now();

        let mut scans = MockScansService::new();

        scans
            .expect_scan_stats()
            .once()
            .withf(move |now| *now >= before)
            .return_once(|_| {
                Ok(ScanStats {
                    total_scans: 0,
                    scans_today: 0,
                    total_qr_codes: 0,
                })
            });

        scans.expect_record_scan().never();
        scans.expect_recent_scans().never();
        scans.expect_scans_for_user().never();

        let res = TestClient::get("http://example.com/scans/stats")
            .send(&make_service(scans))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
