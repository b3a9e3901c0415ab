// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider year wheel project*
//!
//! This crate provides the web API over the year wheel's events.  Every view
//! the year wheel offers (the event list, the agenda, the timeline, and the
//! wheel itself as JSON or SVG) can be fetched with the same filters, and the
//! events can be exported as an ICS calendar or JSON.
//!
//! In read-write mode the events can also be created, edited, deleted, and
//! replaced, given the shared editing password.  Every change is saved to the
//! store before the response is sent.
//!

mod consts;
mod error;
mod handlers;
mod helpers;
mod queries;

pub use consts::*;
pub use error::*;
pub use queries::*;

use axum::Router;
use log::info;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use yearwheel_core::{AppState, SharedPassword};
use yearwheel_renderer::{WheelColours, WheelLayoutParams};
use yearwheel_store::{Repository, StoreError};

/// API access mode (read-only or read-write)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAccessMode {
    Read,
    ReadWrite,
}

/// Everything the handlers share
pub struct ApiState {
    /// Where changes are saved
    repository: Repository,

    /// The events (loaded from the repository at start up)
    state: RwLock<AppState>,

    /// Unlocks the non-GET routes
    password: SharedPassword,

    /// The wheel's size and proportions (the year comes from the request)
    wheel: WheelLayoutParams,

    colours: WheelColours,
}

pub type SharedState = Arc<ApiState>;

impl ApiState {
    /// Load the events from the repository
    pub async fn load(
        repository: Repository,
        password: SharedPassword,
        wheel: WheelLayoutParams,
    ) -> Result<Self, StoreError> {
        let state = repository.load_state().await?;
        info!("API serving {} events", state.events().len());
        Ok(Self {
            repository,
            state: RwLock::new(state),
            password,
            wheel,
            colours: WheelColours::default(),
        })
    }
}

/// Set up the API router
pub async fn prepare_api_router(
    repository: Repository,
    access_mode: ApiAccessMode,
    password: SharedPassword,
    wheel: WheelLayoutParams,
) -> Result<Router, StoreError> {
    // Load the events
    let state = ApiState::load(repository, password, wheel).await?;

    // Get the router
    let apiv1 = handlers::router(access_mode);

    // Add the state
    let apiv1 = apiv1.with_state(Arc::new(state));

    // Add URL path prefix
    let api = Router::new()
        .nest("/api/v1", apiv1)
        .layer(TraceLayer::new_for_http());

    // Return the router
    Ok(api)
}
