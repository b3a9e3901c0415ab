// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for fetching events
//!

use crate::helpers::{event_id_from_path, filtered_events};
use crate::{ApiError, FilterQueryParams, SharedState};
use axum::Json;
use axum::extract::{Path, Query, State};
use yearwheel_core::CalendarEvent;

/// Handle a request for the events that pass the filters
pub async fn handle_get_events(
    State(state): State<SharedState>,
    Query(params): Query<FilterQueryParams>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let filters = params.filter_state()?;
    Ok(Json(filtered_events(&state, &filters).await))
}

/// Handle a request for one event
pub async fn handle_get_event(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<CalendarEvent>, ApiError> {
    let id = event_id_from_path(&id)?;
    state
        .state
        .read()
        .await
        .event(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("No event with ID '{id}'")))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::seeded_state;
    use axum::http::StatusCode;
    use yearwheel_core::Area;

    #[tokio::test]
    async fn events() {
        let state = seeded_state().await;

        // No filters
        let Json(events) = handle_get_events(State(state.clone()), Query(Default::default()))
            .await
            .unwrap();
        assert_eq!(events.len(), 36);

        // One area
        let params = FilterQueryParams {
            areas: Some("Opptak".to_string()),
            ..Default::default()
        };
        let Json(events) = handle_get_events(State(state.clone()), Query(params))
            .await
            .unwrap();
        assert_eq!(events.len(), 7);
        assert!(events.iter().all(|event| event.area == Area::Opptak));

        // Unknown area
        let params = FilterQueryParams {
            areas: Some("Opptak,Ukjent".to_string()),
            ..Default::default()
        };
        let error = handle_get_events(State(state), Query(params))
            .await
            .unwrap_err();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn event() {
        let state = seeded_state().await;

        let Json(event) = handle_get_event(State(state.clone()), Path("opt-intma".to_string()))
            .await
            .unwrap();
        assert_eq!(event.area, Area::Opptak);
        assert_eq!(event.start_date, "2025-01-01");

        let error = handle_get_event(State(state.clone()), Path("missing".to_string()))
            .await
            .unwrap_err();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);

        let error = handle_get_event(State(state), Path(" ".to_string()))
            .await
            .unwrap_err();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }
}
