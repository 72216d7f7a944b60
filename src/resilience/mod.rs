//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to OSRM:
//!     → osrm client issues the call with a per-request timeout
//!     → On HTTP 500: backoff.rs computes the delay before the next attempt
//!     → Attempt budget exhausted: the whole lookup fails
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - Only an upstream 500 is treated as transient; everything else fails fast
//! - Jitter prevents retry storms when many lookups fail at once

pub mod backoff;
