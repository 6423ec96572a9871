//! QR Codes Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::qr_codes::{
    data::NewQrCode,
    records::{QrCodeRecord, QrCodeUuid},
};

const CREATE_QR_CODE_SQL: &str = include_str!("sql/create_qr_code.sql");
const GET_QR_CODE_SQL: &str = include_str!("sql/get_qr_code.sql");
const FIND_BY_SERIAL_SQL: &str = include_str!("sql/find_by_serial.sql");
const COUNT_QR_CODES_SQL: &str = include_str!("sql/count_qr_codes.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgQrCodesRepository;

impl PgQrCodesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_qr_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: QrCodeUuid,
        qr_code: &NewQrCode,
    ) -> Result<QrCodeRecord, sqlx::Error> {
        query_as::<Postgres, QrCodeRecord>(CREATE_QR_CODE_SQL)
            .bind(uuid.into_uuid())
            .bind(&qr_code.gtin)
            .bind(&qr_code.batch)
            .bind(SqlxDate::from(qr_code.expiry))
            .bind(&qr_code.serial)
            .bind(&qr_code.qr_data)
            .bind(qr_code.created_by.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_qr_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        qr_code: QrCodeUuid,
    ) -> Result<QrCodeRecord, sqlx::Error> {
        query_as::<Postgres, QrCodeRecord>(GET_QR_CODE_SQL)
            .bind(qr_code.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_serial(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        serial: &str,
    ) -> Result<QrCodeRecord, sqlx::Error> {
        query_as::<Postgres, QrCodeRecord>(FIND_BY_SERIAL_SQL)
            .bind(serial)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_qr_codes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_QR_CODES_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for QrCodeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: QrCodeUuid::from_uuid(row.try_get("uuid")?),
            gtin: row.try_get("gtin")?,
            batch: row.try_get("batch")?,
            expiry: row.try_get::<SqlxDate, _>("expiry")?.to_jiff(),
            serial: row.try_get("serial")?,
            qr_data: row.try_get("qr_data")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            created_by: row.try_get("created_by")?,
        })
    }
}
