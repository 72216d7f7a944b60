//! Endpoint handlers.
//!
//! # Responsibilities
//! - `GET /` greeting endpoint
//! - `GET /routes` lookup: validate, resolve sequentially, rank, respond

use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::http::request::X_REQUEST_ID;
use crate::http::response::ApiMessage;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routes::{parse_route_query, pipeline};

/// Greeting endpoint.
pub async fn hello() -> impl IntoResponse {
    tracing::info!("Hello, World!");
    (
        StatusCode::OK,
        Json(ApiMessage::new(StatusCode::OK, "Hello World!")),
    )
}

/// Ranked route lookup.
///
/// The query extractor yields every pair in order, so repeated `dst` keys
/// survive with their positions intact.
pub async fn lookup_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let started = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    // 1. Validate the query shape.
    let request = match parse_route_query(&params) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(request_id = %request_id, error = %err, "Rejected route query");
            metrics::record_request("GET", err.status().as_u16(), "/routes", started);
            return err.into_response();
        }
    };

    tracing::debug!(
        request_id = %request_id,
        source = %request.source_string(),
        destinations = request.destinations.len(),
        "Route query validated"
    );

    // 2. Resolve sequentially against OSRM and rank.
    match pipeline::resolve_routes(&state.osrm, &request).await {
        Ok(plan) => {
            metrics::record_request("GET", StatusCode::OK.as_u16(), "/routes", started);
            (StatusCode::OK, Json(plan)).into_response()
        }
        Err(err) => {
            let status = err.status();
            tracing::warn!(
                request_id = %request_id,
                error = %err,
                status = status.as_u16(),
                "Route lookup failed"
            );
            metrics::record_request("GET", status.as_u16(), "/routes", started);
            err.into_response()
        }
    }
}
