// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for downloading the events as a calendar or a JSON backup
//!

use crate::helpers::filtered_events;
use crate::{
    ApiError, FilterQueryParams, ICS_CONTENT_TYPE, ICS_FILE_NAME, JSON_FILE_NAME, SharedState,
};
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use yearwheel_store::{events_to_ics, events_to_json};

/// The `Content-Disposition` value for downloading a file
fn attachment(file_name: &str) -> String {
    format!("attachment; filename=\"{file_name}\"")
}

/// Handle a request for the filtered events as an ICS calendar
pub async fn handle_get_export_ics(
    State(state): State<SharedState>,
    Query(params): Query<FilterQueryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filters = params.filter_state()?;
    let events = filtered_events(&state, &filters).await;
    let headers = [
        (header::CONTENT_TYPE, ICS_CONTENT_TYPE.to_string()),
        (header::CONTENT_DISPOSITION, attachment(ICS_FILE_NAME)),
    ];
    Ok((headers, events_to_ics(&events)))
}

/// Handle a request for the filtered events as a JSON backup
pub async fn handle_get_export_json(
    State(state): State<SharedState>,
    Query(params): Query<FilterQueryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filters = params.filter_state()?;
    let events = filtered_events(&state, &filters).await;
    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (header::CONTENT_DISPOSITION, attachment(JSON_FILE_NAME)),
    ];
    Ok((headers, events_to_json(&events)?))
}
