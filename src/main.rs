//! Products Service
//!
//! A small JSON API over an in-memory product catalog, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ catch-panic ─▶ request-id ─▶ body ─▶ log ─▶ auth ─▶ router
//!                                                                           │
//!                                                      ┌────────────────────┤
//!                                                      ▼                    ▼
//!                                               catalog::validate   catalog::query
//!                                                      │                    │
//!                                                      └──────▶ store ◀─────┘
//!                                                                 │
//!     Client Response                                             ▼
//!     ◀─────────────── http::error (every failure) ◀──────── handler result
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use products_service::http::HttpServer;
use products_service::lifecycle::{resolve_config, signals, Overrides, Shutdown};
use products_service::observability::{logging, metrics};

#[derive(Debug, Parser)]
#[command(name = "products-service", version)]
#[command(about = "In-memory products CRUD API", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long, env = "PRODUCTS_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the config file.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Shared API key, overriding the config file.
    #[arg(long, env = "PRODUCTS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(Overrides {
        config_path: cli.config,
        port: cli.port,
        api_key: cli.api_key,
    })?;

    logging::init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "products-service starting");

    let server = HttpServer::new(config);
    let config = server.config();
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        seed_catalog = config.seed_catalog,
        default_limit = config.pagination.default_limit,
        products = server.store().len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address was validated with the rest of the config.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
            // The store was filled before the recorder existed.
            metrics::record_store_size(server.store().len());
        }
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
