//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        qr_codes::{PgQrCodesService, QrCodesService},
        scans::{PgScansService, ScansService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub qr_codes: Arc<dyn QrCodesService>,
    pub scans: Arc<dyn ScansService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            qr_codes: Arc::new(PgQrCodesService::new(db.clone())),
            scans: Arc::new(PgScansService::new(db)),
        })
    }
}
