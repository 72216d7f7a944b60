//! Route ranking service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod osrm;
pub mod resilience;
pub mod routes;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
