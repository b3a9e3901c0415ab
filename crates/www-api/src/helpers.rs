// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Generic helpers
//!

use crate::{ApiError, ApiState, PASSWORD_HEADER};
use axum::http::{HeaderMap, StatusCode};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use yearwheel_core::{AppState, CalendarEvent, EventId, FilterState};
use yearwheel_renderer::{Engine, WheelLayoutParams};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMsg {
    pub error_msg: String,
}

/// Check the request carries the shared editing password
pub fn check_password(state: &ApiState, headers: &HeaderMap) -> Result<(), ApiError> {
    let attempt = headers
        .get(PASSWORD_HEADER)
        .and_then(|value| value.to_str().ok());
    match attempt {
        Some(attempt) if state.password.verify(attempt) => Ok(()),
        Some(_) => {
            warn!("Rejected an edit with the wrong password");
            Err(ApiError::new(StatusCode::UNAUTHORIZED, "Wrong password"))
        }
        None => Err(ApiError::new(
            StatusCode::UNAUTHORIZED,
            format!("The '{PASSWORD_HEADER}' header is required"),
        )),
    }
}

/// Parse an event ID from a URL path (a blank ID can't match any event)
pub fn event_id_from_path(id: &str) -> Result<EventId, ApiError> {
    EventId::from(id).map_err(|_| ApiError::not_found(format!("No event with ID '{id}'")))
}

/// The events matching the filters
pub async fn filtered_events(state: &ApiState, filters: &FilterState) -> Vec<CalendarEvent> {
    state.state.read().await.events_matching(filters)
}

/// An engine holding the events, with the API's wheel settings for the year
pub fn engine_for(state: &ApiState, events: Vec<CalendarEvent>, year: Option<i32>) -> Engine {
    let mut engine = Engine::new();
    engine.set_colours(state.colours);
    engine.set_wheel_layout_params(WheelLayoutParams {
        year: year.unwrap_or(state.wheel.year),
        ..state.wheel
    });
    engine.set_events(events);
    engine
}

/// Apply a change to the events and save it.  The change is only kept if it
/// was saved.
pub async fn update_events<T, F>(state: &ApiState, change: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut AppState) -> Result<T, ApiError>,
{
    let mut current = state.state.write().await;
    let mut updated = current.clone();
    let result = change(&mut updated)?;
    state.repository.save_state(&updated).await?;
    debug!("Saved {} events", updated.events().len());
    *current = updated;
    Ok(result)
}
