//! Structured logging.
//!
//! `RUST_LOG` wins over the configured level. JSON output is meant for log
//! shipping in production, compact output for a terminal.

use tracing::Subscriber;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::config::ObservabilityConfig;

/// Directive used when neither `RUST_LOG` nor a usable config level is set.
pub const DEFAULT_DIRECTIVE: &str = "uno_site=info,tower_http=info";

/// Filter directive for a configured level, e.g. `debug`.
pub fn directive_for(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    if level.is_empty() {
        DEFAULT_DIRECTIVE.to_string()
    } else {
        format!("uno_site={level},tower_http={level}")
    }
}

/// Subscriber for `config`: env filter plus compact or JSON formatting.
pub fn subscriber(config: &ObservabilityConfig) -> Box<dyn Subscriber + Send + Sync> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive_for(&config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        Box::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .json()
                    .with_current_span(true),
            ),
        )
    } else {
        Box::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .compact(),
            ),
        )
    }
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    subscriber(config).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_becomes_crate_directive() {
        assert_eq!(directive_for("DEBUG"), "uno_site=debug,tower_http=debug");
        assert_eq!(directive_for(" "), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn json_subscriber_records_spans() {
        let config = ObservabilityConfig {
            json_logs: true,
            ..ObservabilityConfig::default()
        };
        let _guard = tracing::subscriber::set_default(subscriber(&config));
        let span = tracing::info_span!("request", request_id = "abc");
        let _entered = span.enter();
        tracing::info!(page = "home", "rendered");
    }

    #[test]
    fn compact_subscriber_is_default() {
        let config = ObservabilityConfig::default();
        assert!(!config.json_logs);
        let _guard = tracing::subscriber::set_default(subscriber(&config));
        tracing::info!("compact");
    }
}
