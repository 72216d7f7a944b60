//! Error taxonomy for route lookups.

use axum::http::StatusCode;
use thiserror::Error;

use crate::osrm::OsrmError;

/// Terminal failure of a route lookup.
///
/// Display strings are sent to clients verbatim in the response envelope
/// and must not be reworded; existing consumers match on them.
#[derive(Debug, Error)]
pub enum RouteError {
    /// `src` or `dst` key absent, or its first value empty.
    #[error("Missing required query parameters: src and/or dst")]
    MissingParameters,

    /// More than one `src` value supplied.
    #[error("Just one `src` param is allowed")]
    ExtraSourceParam,

    /// `src` does not split into exactly two comma-separated fields.
    #[error("Expect `src` to have lattitude and longitude")]
    MalformedSource,

    /// A `dst` does not split into exactly two comma-separated fields.
    #[error("Expect 'dst' to have lattitude and longitude")]
    MalformedDestination,

    /// A coordinate field does not parse as f64.
    #[error("Malformated param type (float64)")]
    MalformedNumber,

    /// OSRM could not be reached at all.
    #[error("Cannot send request to OSRM")]
    UpstreamUnreachable {
        #[source]
        source: OsrmError,
    },

    /// OSRM responded but the body could not be read.
    #[error("Cannot read the response Body from OSRM")]
    UpstreamBodyUnreadable {
        #[source]
        source: OsrmError,
    },

    /// OSRM kept answering 500 until the attempt budget ran out.
    #[error("Tried very hard, but no luck")]
    UpstreamRetriesExhausted { attempts: u32 },

    /// Undecodable body, non-Ok code, or an empty routes array.
    #[error("Cannot UNMARSHAL the response Body from OSRM or Code Response is not Ok")]
    UpstreamData {
        #[source]
        source: OsrmError,
    },
}

impl RouteError {
    /// HTTP status for this failure: 400 for client input, 502 for upstream.
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::MissingParameters
            | RouteError::ExtraSourceParam
            | RouteError::MalformedSource
            | RouteError::MalformedDestination
            | RouteError::MalformedNumber => StatusCode::BAD_REQUEST,
            RouteError::UpstreamUnreachable { .. }
            | RouteError::UpstreamBodyUnreadable { .. }
            | RouteError::UpstreamRetriesExhausted { .. }
            | RouteError::UpstreamData { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<OsrmError> for RouteError {
    fn from(err: OsrmError) -> Self {
        match err {
            OsrmError::RetryExhausted { attempts } => {
                RouteError::UpstreamRetriesExhausted { attempts }
            }
            err @ OsrmError::Send { .. } => RouteError::UpstreamUnreachable { source: err },
            err @ OsrmError::BodyRead { .. } => RouteError::UpstreamBodyUnreadable { source: err },
            err => RouteError::UpstreamData { source: err },
        }
    }
}
