//! User Scans Handler

use std::sync::{Arc, LazyLock};

use regex::Regex;
use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    scans::{create::ScanResponse, errors::into_status_error},
    state::State,
};

/// How many scans are returned when no limit is given.
const DEFAULT_LIMIT: i64 = 5;

/// Upper bound on the per-user feed length.
const MAX_LIMIT: i64 = 50;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::unwrap_used, reason = "the pattern is a compile-time constant")]
    let pattern = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    pattern
});

/// User Scans Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserScansResponse {
    /// The user's most recent scans, newest first
    pub data: Vec<ScanResponse>,

    /// Number of scans returned
    pub count: usize,
}

/// User Scans Handler
///
/// Returns the given user's most recent scan events.
#[endpoint(tags("scans"), summary = "User Scans")]
pub(crate) async fn handler(
    email: PathParam<String>,
    limit: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<UserScansResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let email = email.into_inner();

    if !EMAIL_PATTERN.is_match(&email) {
        return Err(StatusError::bad_request().brief("Invalid email format"));
    }

    let limit = limit
        .into_inner()
        .unwrap_or(DEFAULT_LIMIT)
        .clamp(1, MAX_LIMIT);

    let scans = state
        .app
        .scans
        .scans_for_user(&email, limit)
        .await
        .map_err(into_status_error)?;

    let data: Vec<ScanResponse> = scans.into_iter().map(Into::into).collect();

    Ok(Json(UserScansResponse {
        count: data.len(),
        data,
    }))
}
