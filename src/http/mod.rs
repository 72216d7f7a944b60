//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (stamp x-request-id)
//!     → handlers.rs (validate → osrm fan-out → rank)
//!     → response.rs (RoutePlan JSON, or ApiMessage envelope on failure)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use response::ApiMessage;
pub use server::HttpServer;
