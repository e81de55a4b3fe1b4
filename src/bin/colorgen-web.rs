//! ColorGenerator Web Server Binary
//!
//! This binary starts the JSON API used by the browser front end.
//!
//! # Usage
//!
//! ```bash
//! # Start with configured settings (default 127.0.0.1:3001)
//! colorgen-web
//!
//! # Override host and port
//! colorgen-web --host 0.0.0.0 --port 8080
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorgen::config::Config;
use colorgen::web;

/// ColorGenerator Web Server - JSON API for palette generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to the configured port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to the configured host)
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load or create configuration
    let config = Config::load_or_default();

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);

    info!(presets = config.presets().len(), "Configuration loaded");

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Start the server
    web::run_server(config, addr).await
}
