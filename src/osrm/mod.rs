//! OSRM upstream integration subsystem.
//!
//! # Data Flow
//! ```text
//! "LAT,LON" source + raw destination
//!     → client.rs (build URL, GET with per-request timeout)
//!     → On HTTP 500: resilience::backoff delay, try again (bounded)
//!     → types.rs (decode envelope, check code == "Ok")
//!     → OsrmRoute { duration, distance }
//! ```
//!
//! # Design Decisions
//! - One client instance for the process; reqwest pools connections internally
//! - Errors keep the upstream URL and status for logging, but convert into
//!   the request-level error taxonomy before reaching a handler

pub mod client;
pub mod types;

pub use client::OsrmClient;
pub use types::{OsrmError, OsrmResponse, OsrmResult, OsrmRoute};
