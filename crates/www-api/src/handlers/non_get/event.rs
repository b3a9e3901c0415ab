// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for a single event
//!

use crate::helpers::{check_password, event_id_from_path, update_events};
use crate::{ApiError, SharedState};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use log::info;
use yearwheel_core::{CalendarEvent, EventDraft};

/// Handle a request to create an event
pub async fn handle_put_event(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(mut payload): Json<EventDraft>,
) -> Result<(StatusCode, Json<CalendarEvent>), ApiError> {
    check_password(&state, &headers)?;

    // New events always get a new ID
    payload.id = None;
    let event = payload.into_event()?;

    let event = update_events(&state, |app_state| {
        app_state.save_event(event.clone());
        Ok(event)
    })
    .await?;
    info!("Created event {} ({})", event.id, event.title);
    Ok((StatusCode::CREATED, Json(event)))
}

/// Handle a request to update an event.  Fields missing from the payload keep
/// their current values.
pub async fn handle_patch_event(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<EventDraft>,
) -> Result<Json<CalendarEvent>, ApiError> {
    check_password(&state, &headers)?;
    let id = event_id_from_path(&id)?;

    let event = update_events(&state, |app_state| {
        let existing = app_state
            .event(&id)
            .ok_or_else(|| ApiError::not_found(format!("No event with ID '{id}'")))?;
        let mut draft = payload.merged_over(existing);
        draft.id = Some(id.clone());
        let event = draft.into_event()?;
        app_state.save_event(event.clone());
        Ok(event)
    })
    .await?;
    info!("Updated event {}", event.id);
    Ok(Json(event))
}

/// Handle a request to delete an event
pub async fn handle_delete_event(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    check_password(&state, &headers)?;
    let id = event_id_from_path(&id)?;

    update_events(&state, |app_state| {
        if app_state.delete_event(&id) {
            Ok(())
        } else {
            Err(ApiError::not_found(format!("No event with ID '{id}'")))
        }
    })
    .await?;
    info!("Deleted event {id}");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::PASSWORD_HEADER;
    use crate::test::seeded_state;
    use axum::http::HeaderValue;
    use yearwheel_core::{Area, Campus, EventType};

    fn password_headers(password: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(PASSWORD_HEADER, HeaderValue::from_static(password));
        headers
    }

    fn draft() -> EventDraft {
        EventDraft {
            id: Some(yearwheel_core::EventId::from("ignored").unwrap()),
            title: Some("Ny frist".to_string()),
            start_date: Some("2025-05-02".to_string()),
            end_date: Some("2025-05-02".to_string()),
            event_type: Some(EventType::Deadline),
            area: Some(Area::Eksamen),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create() {
        let state = seeded_state().await;
        let (status, Json(event)) =
            handle_put_event(State(state.clone()), password_headers("ntnu"), Json(draft()))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(event.id.as_str(), "ignored");
        assert_eq!(event.campus, vec![Campus::HeleNtnu]);

        // Saved to the store as well as to memory
        assert_eq!(state.state.read().await.events().len(), 37);
        let saved = state.repository.load_events().await.unwrap();
        assert!(saved.iter().any(|saved| saved.id == event.id));
    }

    #[tokio::test]
    async fn create_invalid() {
        let state = seeded_state().await;

        // Wrong password
        let error = handle_put_event(State(state.clone()), password_headers("feil"), Json(draft()))
            .await
            .unwrap_err();
        assert_eq!(error.status(), StatusCode::UNAUTHORIZED);

        // No password
        let error = handle_put_event(State(state.clone()), HeaderMap::new(), Json(draft()))
            .await
            .unwrap_err();
        assert_eq!(error.status(), StatusCode::UNAUTHORIZED);

        // No title
        let payload = EventDraft {
            title: None,
            ..draft()
        };
        let error = handle_put_event(State(state.clone()), password_headers("ntnu"), Json(payload))
            .await
            .unwrap_err();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);

        // Nothing was saved
        assert_eq!(state.state.read().await.events().len(), 36);
        assert_eq!(state.repository.load_events().await.unwrap().len(), 36);
    }

    #[tokio::test]
    async fn update() {
        let state = seeded_state().await;
        let payload = EventDraft {
            title: Some("Internasjonal master".to_string()),
            ..Default::default()
        };
        let Json(event) = handle_patch_event(
            State(state.clone()),
            password_headers("ntnu"),
            Path("opt-intma".to_string()),
            Json(payload),
        )
        .await
        .unwrap();
        assert_eq!(event.id.as_str(), "opt-intma");
        assert_eq!(event.title, "Internasjonal master");
        assert_eq!(event.start_date, "2025-01-01");
        assert_eq!(event.area, Area::Opptak);

        // Invalid dates are rejected and nothing changes
        let payload = EventDraft {
            end_date: Some("2025-02-30".to_string()),
            ..Default::default()
        };
        let error = handle_patch_event(
            State(state.clone()),
            password_headers("ntnu"),
            Path("opt-intma".to_string()),
            Json(payload),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        let app_state = state.state.read().await;
        let id = yearwheel_core::EventId::from("opt-intma").unwrap();
        assert_eq!(app_state.event(&id).unwrap().end_date, "2025-03-15");
        drop(app_state);

        // Unknown events
        let error = handle_patch_event(
            State(state),
            password_headers("ntnu"),
            Path("missing".to_string()),
            Json(EventDraft::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete() {
        let state = seeded_state().await;
        let status = handle_delete_event(
            State(state.clone()),
            password_headers("ntnu"),
            Path("opt-intma".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(state.repository.load_events().await.unwrap().len(), 35);

        let error = handle_delete_event(
            State(state),
            password_headers("ntnu"),
            Path("opt-intma".to_string()),
        )
        .await
        .unwrap_err();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }
}
