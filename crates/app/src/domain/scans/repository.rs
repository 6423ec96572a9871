//! Scan Events Repository

use jiff::Timestamp;
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    qr_codes::records::{QrCodeRecord, QrCodeUuid},
    scans::records::{ScanRecord, ScanUuid, ScanWithQrCode},
};

const CREATE_SCAN_SQL: &str = include_str!("sql/create_scan.sql");
const RECENT_SCANS_SQL: &str = include_str!("sql/recent_scans.sql");
const USER_SCANS_SQL: &str = include_str!("sql/user_scans.sql");
const COUNT_SCANS_SQL: &str = include_str!("sql/count_scans.sql");
const COUNT_SCANS_SINCE_SQL: &str = include_str!("sql/count_scans_since.sql");
const NOTIFY_SCAN_SQL: &str = include_str!("sql/notify_scan.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgScansRepository;

impl PgScansRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_scan(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ScanUuid,
        qr_code: QrCodeUuid,
        scanned_by: &str,
        device_info: Option<&str>,
    ) -> Result<ScanRecord, sqlx::Error> {
        query_as::<Postgres, ScanRecord>(CREATE_SCAN_SQL)
            .bind(uuid.into_uuid())
            .bind(qr_code.into_uuid())
            .bind(scanned_by)
            .bind(device_info)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn recent_scans(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<ScanWithQrCode>, sqlx::Error> {
        query_as::<Postgres, ScanWithQrCode>(RECENT_SCANS_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn scans_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        scanned_by: &str,
        limit: i64,
    ) -> Result<Vec<ScanWithQrCode>, sqlx::Error> {
        query_as::<Postgres, ScanWithQrCode>(USER_SCANS_SQL)
            .bind(scanned_by)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_scans(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_SCANS_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_scans_since(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        since: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_SCANS_SINCE_SQL)
            .bind(SqlxTimestamp::from(since))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn notify_scan(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        payload: &str,
    ) -> Result<(), sqlx::Error> {
        query(NOTIFY_SCAN_SQL)
            .bind(payload)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for ScanRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ScanUuid::from_uuid(row.try_get("uuid")?),
            qr_code_uuid: QrCodeUuid::from_uuid(row.try_get("qr_code_uuid")?),
            scanned_by: row.try_get("scanned_by")?,
            scanned_at: row.try_get::<SqlxTimestamp, _>("scanned_at")?.to_jiff(),
            device_info: row.try_get("device_info")?,
        })
    }
}

// The feed queries alias scan and QR code columns apart, so the joined row
// is mapped by hand instead of delegating to the single-record impls.
impl<'r> FromRow<'r, PgRow> for ScanWithQrCode {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            scan: ScanRecord {
                uuid: ScanUuid::from_uuid(row.try_get("scan_uuid")?),
                qr_code_uuid: QrCodeUuid::from_uuid(row.try_get("qr_code_uuid")?),
                scanned_by: row.try_get("scanned_by")?,
                scanned_at: row.try_get::<SqlxTimestamp, _>("scanned_at")?.to_jiff(),
                device_info: row.try_get("device_info")?,
            },
            qr_code: QrCodeRecord {
                uuid: QrCodeUuid::from_uuid(row.try_get("qr_uuid")?),
                gtin: row.try_get("gtin")?,
                batch: row.try_get("batch")?,
                expiry: row.try_get::<SqlxDate, _>("expiry")?.to_jiff(),
                serial: row.try_get("serial")?,
                qr_data: row.try_get("qr_data")?,
                created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
                created_by: row.try_get("created_by")?,
            },
        })
    }
}
