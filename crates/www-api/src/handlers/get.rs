// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All GET requests
//!

use crate::SharedState;
use axum::{Router, routing::get};

pub mod events;
pub mod export;
pub mod views;

pub use events::*;
pub use export::*;
pub use views::*;

///
pub fn router() -> Router<SharedState> {
    // GET request routes for API v1
    #[rustfmt::skip]
    let apiv1 = Router::new()
        .route("/events",           get(handle_get_events))
        .route("/event/{id}",       get(handle_get_event))
        .route("/agenda",           get(handle_get_agenda))
        .route("/timeline",         get(handle_get_timeline))
        .route("/wheel/{year}",     get(handle_get_wheel))
        .route("/wheel/{year}/svg", get(handle_get_wheel_svg))
        .route("/export/ics",       get(handle_get_export_ics))
        .route("/export/json",      get(handle_get_export_json));

    apiv1
}
