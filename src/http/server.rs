//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both endpoints
//! - Wire up middleware (timeout, CORS, request ID, tracing)
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - CORS is wide open: any origin may call this read-only API
//! - The inbound timeout bounds each request end to end, upstream
//!   retries included

use std::time::Duration;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::osrm::{OsrmClient, OsrmResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub osrm: OsrmClient,
}

/// HTTP server for the route ranking service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &ServiceConfig) -> OsrmResult<Self> {
        let osrm = OsrmClient::new(&config.osrm, config.retries.clone())?;
        let state = AppState { osrm };
        let router = Self::build_router(config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any);

        Router::new()
            .route("/", get(handlers::hello))
            .route("/routes", get(handlers::lookup_routes))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(cors)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
