//! Wire types and errors for the OSRM routing API.

use serde::Deserialize;
use thiserror::Error;

/// Response code OSRM uses to signal a successful route computation.
pub const RESPONSE_CODE_OK: &str = "Ok";

/// Route summary as returned by the OSRM route service.
///
/// The live API returns additional fields (`legs`, `weight_name`, ...) that
/// are not modeled here; serde ignores them.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OsrmRoute {
    /// Travel time in seconds.
    pub duration: f64,

    /// Travel distance in meters.
    pub distance: f64,
}

/// Top-level OSRM response envelope.
///
/// Both fields default so that OSRM error bodies (a non-Ok `code`, usually
/// without `routes`) decode cleanly and fail on the code check rather than
/// on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmResponse {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// Errors from OSRM client construction and route lookups.
#[derive(Debug, Error)]
pub enum OsrmError {
    /// The configured base URL does not parse.
    #[error("invalid OSRM base URL {url:?}: {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build OSRM HTTP client: {source}")]
    ClientBuild { source: reqwest::Error },

    /// The request never produced a response (connect failure, timeout).
    #[error("failed to send request to {url}: {source}")]
    Send {
        url: String,
        source: reqwest::Error,
    },

    /// The response arrived but its body could not be read.
    #[error("failed to read response body from {url}: {source}")]
    BodyRead {
        url: String,
        source: reqwest::Error,
    },

    /// Every attempt came back with HTTP 500.
    #[error("OSRM kept returning 500 after {attempts} attempts")]
    RetryExhausted { attempts: u32 },

    /// The response body is not valid OSRM JSON.
    #[error("cannot decode OSRM response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },

    /// OSRM reported a non-Ok code (e.g. "NoRoute", "InvalidQuery").
    #[error("OSRM response code {code:?} is not Ok (HTTP {status})")]
    NotOk { code: String, status: u16 },

    /// A code "Ok" response with an empty routes array.
    #[error("OSRM response contained no routes")]
    NoRoutes,
}

/// Result alias for OSRM operations.
pub type OsrmResult<T> = Result<T, OsrmError>;
