//! Uno Digit site server.
//!
//! Serves the marketing site (home, about, services, work, insights, contact)
//! as server-rendered HTML from a compiled-in content catalog.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net (listener, TLS)
//!                      │
//!                      ▼
//!                     http (request ID, trace, limits, rate limit)
//!                      │
//!                      ▼
//!                     routing (path → page, redirect or 404)
//!                      │            │
//!                      ▼            ▼
//!                     content      forms (validation, view state)
//!                      │            │
//!                      ▼            ▼
//!                     pages + seo (maud HTML, meta tags, JSON-LD)
//!                      │
//!     Client Response  ▼
//!     ◀────────────── http response (security headers)
//!
//!     Cross-cutting: config (TOML, hot reload), observability (tracing,
//!     metrics), lifecycle (startup, signals, shutdown), admin API
//! ```

use std::path::PathBuf;

use clap::Parser;

use uno_site::config::{load_config, SiteConfig};
use uno_site::lifecycle::startup;
use uno_site::observability::init_logging;

#[derive(Parser)]
#[command(name = "uno-site")]
#[command(about = "Server for the Uno Digit marketing site", long_about = None)]
struct Cli {
    /// Path to a TOML config file; watched for changes.
    #[arg(short, long, env = "UNO_SITE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };

    init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        admin = config.admin.enabled,
        config_file = ?cli.config,
        "uno-site starting"
    );

    startup::run(config, cli.config).await?;
    Ok(())
}
