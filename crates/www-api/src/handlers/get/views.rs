// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for the agenda, the timeline, and the year wheel
//!

use crate::helpers::{engine_for, filtered_events};
use crate::{ApiError, FilterQueryParams, SVG_CONTENT_TYPE, SharedState, TimelineQueryParams};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use log::debug;
use yearwheel_renderer::{AgendaGroup, TimelineLayout, WheelLayout, draw_wheel};

/// Handle a request for the filtered events grouped by month
pub async fn handle_get_agenda(
    State(state): State<SharedState>,
    Query(params): Query<FilterQueryParams>,
) -> Result<Json<Vec<AgendaGroup>>, ApiError> {
    let filters = params.filter_state()?;
    let events = filtered_events(&state, &filters).await;
    Ok(Json(engine_for(&state, events, None).agenda()))
}

/// Handle a request for the timeline of the month or week containing a date
pub async fn handle_get_timeline(
    State(state): State<SharedState>,
    Query(params): Query<FilterQueryParams>,
    Query(position): Query<TimelineQueryParams>,
) -> Result<Json<TimelineLayout>, ApiError> {
    let filters = params.filter_state()?;
    let navigator = position.navigator()?;
    let events = filtered_events(&state, &filters).await;
    Ok(Json(engine_for(&state, events, None).timeline(&navigator)))
}

/// Handle a request for the year wheel layout
pub async fn handle_get_wheel(
    State(state): State<SharedState>,
    Path(year): Path<i32>,
    Query(params): Query<FilterQueryParams>,
) -> Result<Json<WheelLayout>, ApiError> {
    let filters = params.filter_state()?;
    let events = filtered_events(&state, &filters).await;
    Ok(Json(engine_for(&state, events, Some(year)).wheel()))
}

/// Handle a request for the year wheel drawn as SVG
pub async fn handle_get_wheel_svg(
    State(state): State<SharedState>,
    Path(year): Path<i32>,
    Query(params): Query<FilterQueryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filters = params.filter_state()?;
    let events = filtered_events(&state, &filters).await;
    let engine = engine_for(&state, events, Some(year));
    let layout = engine.wheel();
    debug!("Drawing the {year} wheel ({} rings)", layout.rings.len());
    let svg = draw_wheel(&layout, &engine.colours());
    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg))
}
