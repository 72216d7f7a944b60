//! Typed client for the OSRM route service.
//!
//! # Responsibilities
//! - Issue one `GET {base}/route/v1/driving/{src};{dst}?overview=false` per lookup
//! - Retry with exponential backoff while OSRM answers HTTP 500
//! - Surface transport, decode and data failures as distinct errors
//!
//! # Design Decisions
//! - The destination string is forwarded exactly as received from the caller
//! - No success-status gate: OSRM signals errors through the JSON `code`
//!   field, so non-500 responses always flow into body decode + code check
//! - The attempt budget counts the initial call, not just retries

use std::time::Duration;

use url::Url;

use crate::config::{OsrmConfig, RetryConfig};
use crate::osrm::types::{OsrmError, OsrmResponse, OsrmResult, OsrmRoute, RESPONSE_CODE_OK};
use crate::resilience::backoff::calculate_backoff;

/// HTTP client for the OSRM routing API.
#[derive(Clone, Debug)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: Url,
    retry: RetryConfig,
}

impl OsrmClient {
    /// Build a client from validated configuration.
    pub fn new(config: &OsrmConfig, retry: RetryConfig) -> OsrmResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|source| OsrmError::BaseUrl {
            url: config.base_url.clone(),
            source,
        })?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| OsrmError::ClientBuild { source })?;

        Ok(Self { http, base_url, retry })
    }

    /// Fetch the driving route from `source` to `destination`.
    ///
    /// Both arguments are `"LAT,LON"` strings. Returns the first route of
    /// the OSRM response; an Ok response without routes is a data failure.
    pub async fn fetch_route(&self, source: &str, destination: &str) -> OsrmResult<OsrmRoute> {
        let url = self.route_url(source, destination);

        let mut attempt: u32 = 1;
        let response = loop {
            let response = self
                .http
                .get(url.clone())
                .send()
                .await
                .map_err(|source| OsrmError::Send { url: url.to_string(), source })?;

            if response.status() != reqwest::StatusCode::INTERNAL_SERVER_ERROR {
                break response;
            }

            if attempt >= self.retry.max_attempts {
                tracing::error!(url = %url, attempts = attempt, "OSRM kept returning 500, giving up");
                return Err(OsrmError::RetryExhausted { attempts: attempt });
            }

            let delay = calculate_backoff(
                attempt,
                self.retry.base_delay_ms,
                self.retry.max_delay_ms,
                self.retry.jitter_factor,
            );
            tracing::warn!(
                url = %url,
                attempt,
                max_attempts = self.retry.max_attempts,
                delay_ms = delay.as_millis() as u64,
                "OSRM returned 500, backing off before retry"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        };

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|source| OsrmError::BodyRead { url: url.to_string(), source })?;

        let parsed: OsrmResponse = serde_json::from_slice(&body)
            .map_err(|source| OsrmError::Decode { status, source })?;

        if parsed.code != RESPONSE_CODE_OK {
            return Err(OsrmError::NotOk { code: parsed.code, status });
        }

        parsed.routes.into_iter().next().ok_or(OsrmError::NoRoutes)
    }

    fn route_url(&self, source: &str, destination: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/route/v1/driving/{};{}", source, destination));
        url.set_query(Some("overview=false"));
        url
    }
}
