//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use salvo::{affix_state::inject, prelude::*};

use vaxtag_app::{
    context::AppContext,
    domain::{
        qr_codes::{
            MockQrCodesService,
            records::{QrCodeRecord, QrCodeUuid},
        },
        scans::{
            MockScansService,
            records::{ScanRecord, ScanUuid, ScanWithQrCode},
        },
    },
};

use crate::state::State;

pub(crate) const TEST_PORT: u16 = 3000;

pub(crate) fn make_qr_code(serial: &str) -> QrCodeRecord {
    QrCodeRecord {
        uuid: QrCodeUuid::new(),
        gtin: "12345678901234".to_string(),
        batch: "BATCH001".to_string(),
        expiry: date(2099, 12, 31),
        serial: serial.to_string(),
        qr_data: format!("(01)12345678901234(10)BATCH001(17)991231(21){serial}"),
        created_at: Timestamp::UNIX_EPOCH,
        created_by: Some("admin@example.com".to_string()),
    }
}

pub(crate) fn make_scan(qr_code: &QrCodeRecord, scanned_by: &str) -> ScanWithQrCode {
    ScanWithQrCode {
        scan: ScanRecord {
            uuid: ScanUuid::new(),
            qr_code_uuid: qr_code.uuid,
            scanned_by: scanned_by.to_string(),
            scanned_at: Timestamp::UNIX_EPOCH,
            device_info: None,
        },
        qr_code: qr_code.clone(),
    }
}

fn strict_qr_codes_mock() -> MockQrCodesService {
    let mut qr_codes = MockQrCodesService::new();

    qr_codes.expect_create_qr_code().never();
    qr_codes.expect_get_qr_code().never();
    qr_codes.expect_find_by_serial().never();

    qr_codes
}

fn strict_scans_mock() -> MockScansService {
    let mut scans = MockScansService::new();

    scans.expect_record_scan().never();
    scans.expect_recent_scans().never();
    scans.expect_scans_for_user().never();
    scans.expect_scan_stats().never();

    scans
}

pub(crate) fn state_with_services(
    qr_codes: MockQrCodesService,
    scans: MockScansService,
) -> Arc<State> {
    Arc::new(State::new(
        AppContext {
            qr_codes: Arc::new(qr_codes),
            scans: Arc::new(scans),
        },
        TEST_PORT,
    ))
}

pub(crate) fn state_with_qr_codes(qr_codes: MockQrCodesService) -> Arc<State> {
    state_with_services(qr_codes, strict_scans_mock())
}

pub(crate) fn state_with_scans(scans: MockScansService) -> Arc<State> {
    state_with_services(strict_qr_codes_mock(), scans)
}

pub(crate) fn qr_codes_service(qr_codes: MockQrCodesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_qr_codes(qr_codes)))
            .push(route),
    )
}

pub(crate) fn scans_service(scans: MockScansService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_scans(scans)))
            .push(route),
    )
}
