//! QR codes service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::qr_codes::{
        data::NewQrCode,
        errors::QrCodesServiceError,
        records::{QrCodeRecord, QrCodeUuid},
        repository::PgQrCodesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgQrCodesService {
    db: Db,
    repository: PgQrCodesRepository,
}

impl PgQrCodesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgQrCodesRepository::new(),
        }
    }
}

#[async_trait]
impl QrCodesService for PgQrCodesService {
    async fn create_qr_code(
        &self,
        qr_code: NewQrCode,
    ) -> Result<QrCodeRecord, QrCodesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_qr_code(&mut tx, QrCodeUuid::new(), &qr_code)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_qr_code(&self, qr_code: QrCodeUuid) -> Result<QrCodeRecord, QrCodesServiceError> {
        let mut tx = self.db.begin().await?;

        let qr_code = self.repository.get_qr_code(&mut tx, qr_code).await?;

        tx.commit().await?;

        Ok(qr_code)
    }

    async fn find_by_serial(&self, serial: &str) -> Result<QrCodeRecord, QrCodesServiceError> {
        let mut tx = self.db.begin().await?;

        let qr_code = self.repository.find_by_serial(&mut tx, serial).await?;

        tx.commit().await?;

        Ok(qr_code)
    }
}

#[automock]
#[async_trait]
pub trait QrCodesService: Send + Sync {
    /// Persist a new QR code record; the serial must be unused.
    async fn create_qr_code(&self, qr_code: NewQrCode)
    -> Result<QrCodeRecord, QrCodesServiceError>;

    /// Retrieve a single QR code by its identifier.
    async fn get_qr_code(&self, qr_code: QrCodeUuid) -> Result<QrCodeRecord, QrCodesServiceError>;

    /// Retrieve a single QR code by its serial number.
    async fn find_by_serial(&self, serial: &str) -> Result<QrCodeRecord, QrCodesServiceError>;
}
