//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Check addresses and the site URL parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{SiteConfig, PLACEHOLDER_API_KEY};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("site.url: {0}")]
    InvalidSiteUrl(String),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("admin.api_key must be changed when the admin API is enabled")]
    PlaceholderApiKey,

    #[error("observability.log_level: unknown level '{0}'")]
    UnknownLogLevel(String),

    #[error("listener.tls: {0} is empty")]
    EmptyTlsPath(&'static str),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address("listener.bind_address", &config.listener.bind_address, &mut errors);
    if config.listener.max_connections == 0 {
        errors.push(ValidationError::NotPositive("listener.max_connections"));
    }
    if let Some(tls) = &config.listener.tls {
        if tls.cert_path.trim().is_empty() {
            errors.push(ValidationError::EmptyTlsPath("cert_path"));
        }
        if tls.key_path.trim().is_empty() {
            errors.push(ValidationError::EmptyTlsPath("key_path"));
        }
    }

    if let Err(reason) = check_site_url(&config.site.url) {
        errors.push(ValidationError::InvalidSiteUrl(reason));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::NotPositive("timeouts.request_secs"));
    }

    if config.rate_limit.enabled {
        if !(config.rate_limit.requests_per_second > 0.0) {
            errors.push(ValidationError::NotPositive("rate_limit.requests_per_second"));
        }
        if config.rate_limit.burst_size == 0 {
            errors.push(ValidationError::NotPositive("rate_limit.burst_size"));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }
    if config.observability.metrics_enabled {
        check_address("observability.metrics_address", &config.observability.metrics_address, &mut errors);
    }

    if config.admin.enabled {
        check_address("admin.bind_address", &config.admin.bind_address, &mut errors);
        if config.admin.api_key.is_empty() || config.admin.api_key == PLACEHOLDER_API_KEY {
            errors.push(ValidationError::PlaceholderApiKey);
        }
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::NotPositive("security.max_body_size"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_site_url(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    if value.ends_with('/') {
        return Err("must not end with '/'".to_string());
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err("must not carry a query or fragment".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::TlsConfig;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(validate_config(&SiteConfig::default()), Ok(()));
    }

    #[test]
    fn collects_every_error() {
        let mut config = SiteConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.rate_limit.burst_size = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::NotPositive("timeouts.request_secs")));
        assert!(errors.contains(&ValidationError::UnknownLogLevel("loud".into())));
    }

    #[test]
    fn rejects_bad_site_urls() {
        for url in ["unodigit.com.au", "ftp://unodigit.com.au", "https://unodigit.com.au/", "https://x.io?a=1"] {
            let mut config = SiteConfig::default();
            config.site.url = url.into();
            let errors = validate_config(&config).unwrap_err();
            assert!(
                matches!(errors[0], ValidationError::InvalidSiteUrl(_)),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn admin_requires_real_key() {
        let mut config = SiteConfig::default();
        config.admin.enabled = true;
        assert_eq!(validate_config(&config), Err(vec![ValidationError::PlaceholderApiKey]));

        config.admin.api_key = "s3cret".into();
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn disabled_rate_limit_skips_checks() {
        let mut config = SiteConfig::default();
        config.rate_limit.enabled = false;
        config.rate_limit.requests_per_second = 0.0;
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn tls_paths_must_be_set() {
        let mut config = SiteConfig::default();
        config.listener.tls = Some(TlsConfig {
            cert_path: "cert.pem".into(),
            key_path: " ".into(),
        });
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::EmptyTlsPath("key_path")])
        );
    }
}
