//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): requests by method, status
//! - `site_request_duration_seconds` (histogram): latency by method
//! - `site_page_views_total` (counter): rendered pages by page name
//! - `site_content_redirects_total` (counter): unknown slugs by listing
//! - `site_form_submissions_total` (counter): form posts by form, outcome
//! - `site_rate_limited_total` (counter): rejected posts by reason
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "site_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("site_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_page_view(page: &'static str) {
    counter!("site_page_views_total", "page" => page).increment(1);
}

pub fn record_redirect(listing: &'static str) {
    counter!("site_content_redirects_total", "listing" => listing).increment(1);
}

pub fn record_form_submission(form: &'static str, outcome: &'static str) {
    counter!("site_form_submissions_total", "form" => form, "outcome" => outcome).increment(1);
}

pub fn record_rate_limited(reason: &'static str) {
    counter!("site_rate_limited_total", "reason" => reason).increment(1);
}
