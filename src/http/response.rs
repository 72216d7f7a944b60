//! Response envelopes and error serialization.
//!
//! # Responsibilities
//! - Define the `{code, body}` JSON envelope for greeting and error responses
//! - Map a RouteError into exactly one JSON response with the right status
//!
//! # Design Decisions
//! - The envelope's `code` duplicates the HTTP status; clients read either
//! - Success payloads (RoutePlan) bypass the envelope entirely

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::routes::RouteError;

/// JSON envelope for the greeting endpoint and every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub code: u16,
    pub body: String,
}

impl ApiMessage {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            body: body.into(),
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = ApiMessage::new(status, self.to_string());
        (status, Json(message)).into_response()
    }
}
