//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Placeholder admin key; validation rejects it when the admin API is enabled.
pub const PLACEHOLDER_API_KEY: &str = "CHANGE_ME_IN_PRODUCTION";

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Site identity used in metadata, structured data and the footer.
    pub site: SiteIdentity,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Form submission rate limiting.
    pub rate_limit: RateLimitConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub admin: AdminConfig,

    #[serde(default)]
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,

    /// Maximum concurrent requests in flight (backpressure).
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            tls: None,
            max_connections: 10_000,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Who the site belongs to.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SiteIdentity {
    /// Organisation name, used as `og:site_name`.
    pub name: String,

    /// Absolute base URL without trailing slash.
    pub url: String,

    /// Default social sharing image, absolute or site-relative.
    pub default_image: String,

    /// Open Graph locale.
    pub locale: String,

    pub email: String,
    pub phone: String,
    pub street_address: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: "Uno Digit".to_string(),
            url: "https://unodigit.com.au".to_string(),
            default_image: "/og-image.jpg".to_string(),
            locale: "en_AU".to_string(),
            email: "hello@unodigit.com".to_string(),
            phone: "+61 2 8000 0000".to_string(),
            street_address: "100 Tech Avenue".to_string(),
            locality: "Sydney".to_string(),
            region: "NSW".to_string(),
            postal_code: "2000".to_string(),
            country: "AU".to_string(),
        }
    }
}

impl SiteIdentity {
    /// Phone number in `tel:` form (digits and leading plus only).
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Grace period for in-flight requests on shutdown, in seconds.
    pub shutdown_grace_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            shutdown_grace_secs: 10,
        }
    }
}

/// Rate limiting configuration for form submissions.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Enable rate limiting.
    pub enabled: bool,

    /// Sustained submissions per second per IP.
    pub requests_per_second: f64,

    /// Burst capacity.
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            requests_per_second: 0.2,
            burst_size: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the compact format.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Admin API configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AdminConfig {
    /// Enable admin API.
    pub enabled: bool,

    /// API key for authentication (Bearer token).
    pub api_key: String,

    /// Admin API bind address.
    pub bind_address: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: PLACEHOLDER_API_KEY.to_string(),
            bind_address: "127.0.0.1:8081".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            [site]
            name = "Example"

            [rate_limit]
            burst_size = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.site.name, "Example");
        assert_eq!(config.site.url, "https://unodigit.com.au");
        assert_eq!(config.rate_limit.burst_size, 2);
        assert!(config.rate_limit.enabled);
    }

    #[test]
    fn phone_href_strips_formatting() {
        assert_eq!(SiteIdentity::default().phone_href(), "tel:+61280000000");
    }
}
