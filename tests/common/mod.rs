//! Shared utilities for integration testing.

use std::net::SocketAddr;

use route_ranker::config::ServiceConfig;
use route_ranker::http::HttpServer;
use route_ranker::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Service config pointed at a stub OSRM server, with fast retry delays so
/// failure tests finish quickly.
pub fn test_config(osrm_url: &str) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.osrm.base_url = osrm_url.to_string();
    config.osrm.timeout_secs = 5;
    config.retries.base_delay_ms = 10;
    config.retries.max_delay_ms = 50;
    config
}

/// Bind the service to an ephemeral port and run it until `shutdown` fires.
///
/// The listener is bound before the server task starts, so requests sent
/// right after this returns are queued rather than refused.
pub async fn spawn_service(config: ServiceConfig, shutdown: &Shutdown) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(&config).unwrap();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    addr
}

/// HTTP client that ignores proxy environment variables.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
