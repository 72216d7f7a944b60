//! Sequential route resolution.
//!
//! # Responsibilities
//! - Render the canonical source string once per request
//! - Call OSRM once per destination, strictly in query order
//! - Abort on the first failure; no partial results survive
//! - Rank the collected timings before returning

use crate::osrm::OsrmClient;
use crate::routes::error::RouteError;
use crate::routes::query::RouteRequest;
use crate::routes::ranker;
use crate::routes::types::{RoutePlan, RouteTiming};

/// Resolve every destination against OSRM and return the ranked plan.
///
/// Destination N+1 is not contacted until destination N fully resolved;
/// a late failure discards all earlier successes.
pub async fn resolve_routes(
    client: &OsrmClient,
    request: &RouteRequest,
) -> Result<RoutePlan, RouteError> {
    let source = request.source_string();

    let mut routes = Vec::with_capacity(request.destinations.len());
    for destination in &request.destinations {
        let route = client.fetch_route(&source, &destination.raw).await?;
        routes.push(RouteTiming {
            destination: destination.raw.clone(),
            duration: route.duration,
            distance: route.distance,
        });
    }

    ranker::rank(&mut routes);

    Ok(RoutePlan { source, routes })
}
