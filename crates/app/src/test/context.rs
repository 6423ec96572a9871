//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{qr_codes::PgQrCodesService, scans::PgScansService},
};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub qr_codes: PgQrCodesService,
    pub scans: PgScansService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            qr_codes: PgQrCodesService::new(db.clone()),
            scans: PgScansService::new(db),
            db: test_db,
        }
    }
}
