// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! API error response
//!

use crate::QueryError;
use crate::helpers::ErrorMsg;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use yearwheel_core::DraftError;
use yearwheel_store::StoreError;

/// Container for API errors.  Can be sent back to the client
#[derive(Debug)]
pub struct ApiError(pub (StatusCode, Json<ErrorMsg>));

impl ApiError {
    pub fn new<S: ToString>(status: StatusCode, error_msg: S) -> Self {
        ApiError((
            status,
            Json(ErrorMsg {
                error_msg: error_msg.to_string(),
            }),
        ))
    }

    pub fn not_found<S: ToString>(error_msg: S) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_msg)
    }

    pub fn status(&self) -> StatusCode {
        self.0.0
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        warn!("Store error: {value}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, value)
    }
}

impl From<DraftError> for ApiError {
    fn from(value: DraftError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, value)
    }
}

impl From<QueryError> for ApiError {
    fn from(value: QueryError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, value)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, value)
    }
}
