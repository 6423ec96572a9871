//! Recent Scans Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    scans::{create::ScanResponse, errors::into_status_error},
    state::State,
};

/// How many scans the feed returns when no limit is given.
const DEFAULT_LIMIT: i64 = 50;

/// Recent Scans Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecentScansResponse {
    /// Always true; failures are reported as status errors
    pub success: bool,

    /// The most recent scans, newest first
    pub scans: Vec<ScanResponse>,

    /// Number of scans returned
    pub count: usize,
}

/// Recent Scans Handler
///
/// Returns the latest scan events with their QR code details.
#[endpoint(tags("scans"), summary = "Recent Scans")]
pub(crate) async fn handler(
    limit: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<RecentScansResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let limit = limit.into_inner().unwrap_or(DEFAULT_LIMIT);

    let scans = state
        .app
        .scans
        .recent_scans(limit)
        .await
        .map_err(into_status_error)?;

    let scans: Vec<ScanResponse> = scans.into_iter().map(Into::into).collect();

    Ok(Json(RecentScansResponse {
        success: true,
        count: scans.len(),
        scans,
    }))
}
