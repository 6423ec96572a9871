//! Scans service.

use async_trait::async_trait;
use jiff::{Timestamp, tz::TimeZone};
use mockall::automock;
use serde_json::json;

use crate::{
    database::Db,
    domain::{
        qr_codes::repository::PgQrCodesRepository,
        scans::{
            data::NewScan,
            errors::ScansServiceError,
            records::{ScanStats, ScanUuid, ScanWithQrCode},
            repository::PgScansRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgScansService {
    db: Db,
    repository: PgScansRepository,
    qr_codes: PgQrCodesRepository,
}

impl PgScansService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgScansRepository::new(),
            qr_codes: PgQrCodesRepository::new(),
        }
    }
}

/// Midnight at the start of `now`'s UTC day.
fn start_of_utc_day(now: Timestamp) -> Result<Timestamp, jiff::Error> {
    let today = now.to_zoned(TimeZone::UTC).date();

    Ok(today.to_zoned(TimeZone::UTC)?.timestamp())
}

#[async_trait]
impl ScansService for PgScansService {
    async fn record_scan(&self, scan: NewScan) -> Result<ScanWithQrCode, ScansServiceError> {
        let mut tx = self.db.begin().await?;

        let qr_code = match self.qr_codes.find_by_serial(&mut tx, &scan.serial).await {
            Ok(qr_code) => qr_code,
            Err(sqlx::Error::RowNotFound) => {
                return Err(ScansServiceError::UnknownSerial(scan.serial));
            }
            Err(error) => return Err(error.into()),
        };

        let record = self
            .repository
            .create_scan(
                &mut tx,
                ScanUuid::new(),
                qr_code.uuid,
                &scan.scanned_by,
                scan.device_info.as_deref(),
            )
            .await?;

        // Store-side half of the live dashboard feed; subscribers LISTEN on
        // the scan_events channel.
        let payload = json!({
            "uuid": record.uuid.into_uuid(),
            "serial": qr_code.serial,
            "scanned_by": record.scanned_by,
            "scanned_at": record.scanned_at.to_string(),
        })
        .to_string();

        self.repository.notify_scan(&mut tx, &payload).await?;

        tx.commit().await?;

        Ok(ScanWithQrCode {
            scan: record,
            qr_code,
        })
    }

    async fn recent_scans(&self, limit: i64) -> Result<Vec<ScanWithQrCode>, ScansServiceError> {
        let mut tx = self.db.begin().await?;

        let scans = self.repository.recent_scans(&mut tx, limit).await?;

        tx.commit().await?;

        Ok(scans)
    }

    async fn scans_for_user(
        &self,
        scanned_by: &str,
        limit: i64,
    ) -> Result<Vec<ScanWithQrCode>, ScansServiceError> {
        let mut tx = self.db.begin().await?;

        let scans = self
            .repository
            .scans_for_user(&mut tx, scanned_by, limit)
            .await?;

        tx.commit().await?;

        Ok(scans)
    }

    async fn scan_stats(&self, now: Timestamp) -> Result<ScanStats, ScansServiceError> {
        let today_start = start_of_utc_day(now)?;

        let mut tx = self.db.begin().await?;

        let total_scans = self.repository.count_scans(&mut tx).await?;
        let scans_today = self
            .repository
            .count_scans_since(&mut tx, today_start)
            .await?;
        let total_qr_codes = self.qr_codes.count_qr_codes(&mut tx).await?;

        tx.commit().await?;

        Ok(ScanStats {
            total_scans,
            scans_today,
            total_qr_codes,
        })
    }
}

#[automock]
#[async_trait]
pub trait ScansService: Send + Sync {
    /// Record a scan of the QR code carrying the given serial and return
    /// the event joined with the code it matched.
    async fn record_scan(&self, scan: NewScan) -> Result<ScanWithQrCode, ScansServiceError>;

    /// Retrieve the most recent scan events, newest first.
    async fn recent_scans(&self, limit: i64) -> Result<Vec<ScanWithQrCode>, ScansServiceError>;

    /// Retrieve a single user's most recent scan events, newest first.
    async fn scans_for_user(
        &self,
        scanned_by: &str,
        limit: i64,
    ) -> Result<Vec<ScanWithQrCode>, ScansServiceError>;

    /// Aggregate counters for the dashboard, relative to `now`.
    async fn scan_stats(&self, now: Timestamp) -> Result<ScanStats, ScansServiceError>;
}
