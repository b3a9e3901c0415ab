// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All handlers
//!

use crate::{ApiAccessMode, SharedState};
use axum::Router;

pub mod get;
pub mod non_get;

/// The routes for the access mode
pub fn router(access_mode: ApiAccessMode) -> Router<SharedState> {
    // GET request routes for API v1
    let router = get::router();

    // Non-GET request routes for API v1
    match access_mode {
        ApiAccessMode::Read => router,
        ApiAccessMode::ReadWrite => router.merge(non_get::router()),
    }
}
