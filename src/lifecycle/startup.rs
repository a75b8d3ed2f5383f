//! Startup orchestration.
//!
//! Content is verified before anything binds, so a catalog with a bad or
//! duplicated slug never serves traffic. Any startup error is fatal.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::config::{ConfigWatcher, SiteConfig};
use crate::content::{ContentError, CATALOG};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::net::{self, ListenerError};
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Content catalog is invalid: {}", join(.0))]
    Content(Vec<ContentError>),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("Metrics exporter failed: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("Invalid metrics address {0}")]
    MetricsAddress(String),

    #[error("Config watcher failed: {0}")]
    Watch(#[from] notify::Error),

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

fn join(errors: &[ContentError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Start every subsystem in order and serve until a termination signal.
///
/// `config_path` enables hot reload of that file.
pub async fn run(config: SiteConfig, config_path: Option<PathBuf>) -> Result<(), StartupError> {
    CATALOG.verify().map_err(StartupError::Content)?;
    tracing::info!(
        articles = CATALOG.articles.len(),
        projects = CATALOG.projects.len() + 1,
        "Content catalog verified"
    );

    if config.observability.metrics_enabled {
        let addr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let listener = net::bind(&config.listener.bind_address).await?;

    // The watcher must stay alive for as long as the server runs.
    let (config_updates, _watcher) = match config_path {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(&path);
            (updates, Some(watcher.run()?))
        }
        None => {
            let (_, updates) = mpsc::unbounded_channel();
            (updates, None)
        }
    };

    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown.clone());

    HttpServer::new(config)
        .run(listener, config_updates, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
