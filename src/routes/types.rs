//! Response model for ranked route lookups.

use serde::{Deserialize, Serialize};

/// Travel summary for one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTiming {
    /// The destination exactly as it appeared in the query string.
    pub destination: String,

    /// Travel time in seconds.
    pub duration: f64,

    /// Travel distance in meters.
    pub distance: f64,
}

/// The ranked lookup result returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Canonical "LAT,LON" source the routes were computed from.
    pub source: String,

    /// Destination timings, ranked by the duration-then-distance policy.
    pub routes: Vec<RouteTiming>,
}
