//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Ctrl-C received → trigger broadcast → server stops accepting
//!     → in-flight requests drain → exit
//! ```
//!
//! # Design Decisions
//! - One broadcast channel fans the signal out to every long-running task
//! - Tests drive the same channel to stop servers deterministically

pub mod shutdown;

pub use shutdown::Shutdown;
