//! Route lookup subsystem.
//!
//! # Data Flow
//! ```text
//! raw query pairs
//!     → query.rs (validate, build typed RouteRequest)
//!     → pipeline.rs (source string, one OSRM call per destination)
//!     → ranker.rs (duration sort, full distance resort on any tie)
//!     → RoutePlan (serialized by the HTTP layer)
//!
//! Any failure:
//!     → error.rs (RouteError: exact client-facing message + status)
//! ```
//!
//! # Design Decisions
//! - Validation is fail-fast; the first broken rule decides the message
//! - Fan-out is strictly sequential; destination order is call order
//! - Errors are terminal: one failed destination fails the whole lookup

pub mod error;
pub mod pipeline;
pub mod query;
pub mod ranker;
pub mod types;

pub use error::RouteError;
pub use query::{parse_route_query, RouteRequest};
pub use types::{RoutePlan, RouteTiming};
