//! REST API server for the in-memory car store.
//!
//! Parses configuration, wires the store into the router, and serves
//! until Ctrl+C.

use std::net::IpAddr;
use std::sync::Arc;

use anyhow::Context;
use car_store_api::config::DEFAULT_PORT;
use car_store_api::{ApiConfig, Router, Server};
use car_store_core::CarStore;
use clap::Parser;
use tokio::signal;

/// Command-line arguments for the car server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Request body timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    request_timeout_ms: u64,
}

impl From<Args> for ApiConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            request_timeout_ms: args.request_timeout_ms,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let config = Arc::new(ApiConfig::from(args));
    let store = Arc::new(CarStore::new());

    let router = Router::new(store, Arc::clone(&config));
    let server = Server::new(config.addr(), router);

    tracing::info!(
        addr = %config.addr(),
        request_timeout_ms = config.request_timeout_ms,
        "Starting car store server"
    );

    let mut server_handle = tokio::spawn(server.serve());

    tokio::select! {
        result = &mut server_handle => {
            result
                .context("server task panicked")?
                .with_context(|| format!("failed to serve on {}", config.addr()))?;
        }
        result = signal::ctrl_c() => {
            result.context("failed to listen for ctrl_c")?;
            tracing::info!("Shutting down server...");
            server_handle.abort();
        }
    }

    Ok(())
}
