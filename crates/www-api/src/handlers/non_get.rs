// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All requests that aren't GET requests.  Each needs the shared editing
//! password.
//!

pub mod event;
pub mod events;

use crate::SharedState;
use axum::{
    Router,
    routing::{patch, put},
};
pub use event::*;
pub use events::*;

///
pub fn router() -> Router<SharedState> {
    // Non-GET request routes for API v1
    #[rustfmt::skip]
    let apiv1 = Router::new()
        .route("/event",      put(handle_put_event))
        .route("/event/{id}", patch(handle_patch_event)
                                  .delete(handle_delete_event))
        .route("/events",     put(handle_put_events));

    apiv1
}
