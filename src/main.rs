//! Route ranking service.
//!
//! An HTTP façade over OSRM: accepts a source and one or more destination
//! coordinates, queries OSRM once per destination, and returns the
//! destinations ranked by travel duration (distance on ties).
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────────────┐
//!                     │                     ROUTE RANKER                     │
//!                     │                                                      │
//!     Client Request  │  ┌─────────┐    ┌───────────┐    ┌──────────────┐    │
//!     ────────────────┼─▶│  http   │───▶│  routes   │───▶│     osrm     │────┼──── OSRM
//!                     │  │ server  │    │ validator │    │    client    │    │     API
//!                     │  └─────────┘    └───────────┘    └──────┬───────┘    │
//!                     │                                         │            │
//!                     │                                  on 500 ▼            │
//!                     │                                 ┌──────────────┐     │
//!                     │                                 │  resilience  │     │
//!                     │                                 │   backoff    │     │
//!                     │                                 └──────┬───────┘     │
//!                     │                                        │             │
//!     Client Response │  ┌─────────┐    ┌───────────┐   ┌──────┴───────┐     │
//!     ◀───────────────┼──│response │◀───│  ranker   │◀──│  collected   │     │
//!                     │  │ writer  │    │           │   │   timings    │     │
//!                     │  └─────────┘    └───────────┘   └──────────────┘     │
//!                     │                                                      │
//!                     │  ┌────────────────────────────────────────────────┐  │
//!                     │  │             Cross-Cutting Concerns             │  │
//!                     │  │  ┌────────┐ ┌───────────────┐ ┌───────────┐    │  │
//!                     │  │  │ config │ │ observability │ │ lifecycle │    │  │
//!                     │  │  └────────┘ └───────────────┘ └───────────┘    │  │
//!                     │  └────────────────────────────────────────────────┘  │
//!                     └──────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use route_ranker::config::loader::resolve_config;
use route_ranker::http::HttpServer;
use route_ranker::lifecycle::Shutdown;
use route_ranker::observability::metrics;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "route-ranker",
    version,
    about = "Ranks driving routes by OSRM travel time"
)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_ranker=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("route-ranker v0.1.0 starting");

    let config = resolve_config(args.config.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        osrm_url = %config.osrm.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        retry_attempts = config.retries.max_attempts,
        "Configuration loaded"
    );

    // Metrics exporter on its own listener
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Ctrl-C triggers the shutdown broadcast
    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    // Create and run HTTP server
    let server = HttpServer::new(&config)?;
    server.run(listener, receiver).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
