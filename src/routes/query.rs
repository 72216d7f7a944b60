//! Query-string validation for route lookups.
//!
//! # Responsibilities
//! - Accept the raw, order-preserving query pairs from the HTTP layer
//! - Enforce the src/dst shape rules; the first broken rule wins
//! - Produce a typed RouteRequest with raw destination strings preserved
//!
//! # Design Decisions
//! - Pure function over the pairs; no extractor types leak in here
//! - No whitespace trimming: " 52.5" fails float parsing
//! - Destination order is kept; it drives the upstream call order

use crate::routes::error::RouteError;

/// A parsed latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One requested destination: the parsed coordinate plus the raw query
/// value, which is reused verbatim for the upstream call and the response.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub raw: String,
    pub coordinate: Coordinate,
}

/// A validated route lookup request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub source: Coordinate,
    pub destinations: Vec<Destination>,
}

impl RouteRequest {
    /// Canonical "LAT,LON" form of the source, re-rendered from the parsed
    /// floats. This is the shortest round-trip representation, so an input
    /// of "13.380" comes back as "13.38".
    pub fn source_string(&self) -> String {
        format!("{},{}", self.source.latitude, self.source.longitude)
    }
}

/// Validate raw query pairs into a [`RouteRequest`].
///
/// Rules, in order, first failure wins:
/// 1. both `src` and `dst` present with a non-empty first value
/// 2. exactly one `src`
/// 3. `src` splits into two comma-separated fields
/// 4. both `src` fields parse as f64
/// 5. each `dst`, in order, splits into two fields that parse as f64
pub fn parse_route_query(params: &[(String, String)]) -> Result<RouteRequest, RouteError> {
    let src_values: Vec<&str> = params
        .iter()
        .filter(|(key, _)| key == "src")
        .map(|(_, value)| value.as_str())
        .collect();
    let dst_values: Vec<&str> = params
        .iter()
        .filter(|(key, _)| key == "dst")
        .map(|(_, value)| value.as_str())
        .collect();

    if src_values.first().map_or(true, |v| v.is_empty())
        || dst_values.first().map_or(true, |v| v.is_empty())
    {
        return Err(RouteError::MissingParameters);
    }

    if src_values.len() > 1 {
        return Err(RouteError::ExtraSourceParam);
    }

    let source = parse_coordinate(src_values[0], RouteError::MalformedSource)?;

    let mut destinations = Vec::with_capacity(dst_values.len());
    for raw in dst_values {
        let coordinate = parse_coordinate(raw, RouteError::MalformedDestination)?;
        destinations.push(Destination {
            raw: raw.to_string(),
            coordinate,
        });
    }

    Ok(RouteRequest { source, destinations })
}

fn parse_coordinate(raw: &str, shape_error: RouteError) -> Result<Coordinate, RouteError> {
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != 2 {
        return Err(shape_error);
    }

    let latitude = fields[0]
        .parse::<f64>()
        .map_err(|_| RouteError::MalformedNumber)?;
    let longitude = fields[1]
        .parse::<f64>()
        .map_err(|_| RouteError::MalformedNumber)?;

    Ok(Coordinate { latitude, longitude })
}
