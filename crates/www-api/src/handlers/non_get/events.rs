// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for replacing every event at once (restoring a backup)
//!

use crate::helpers::{check_password, update_events};
use crate::{ApiError, SharedState};
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use log::info;
use yearwheel_core::CalendarEvent;

/// Handle a request to replace the whole collection.  The body is only used
/// if every event in it is valid.
pub async fn handle_put_events(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<Vec<CalendarEvent>>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    check_password(&state, &headers)?;
    let events = update_events(&state, |app_state| {
        app_state.replace_all(payload);
        Ok(app_state.events().to_vec())
    })
    .await?;
    info!("Replaced all events ({} events)", events.len());
    Ok(Json(events))
}
