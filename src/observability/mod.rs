//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; the fmt subscriber is installed in main
//! - Request IDs flow through headers so every log line can carry one
//! - Metrics exposition runs on its own port, away from the service traffic

pub mod metrics;
