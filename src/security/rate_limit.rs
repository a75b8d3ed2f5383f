//! Per-client rate limiting of form submissions.
//!
//! Only `POST` requests are counted; page views are never limited. Limits are
//! read from the live configuration on every check, so a reload takes effect
//! for existing clients on their next submission.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;

use crate::config::RateLimitConfig;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Buckets untouched for this long are dropped by [`RateLimiter::prune`].
const IDLE_EVICTION: Duration = Duration::from_secs(600);

/// A simple token bucket.
#[derive(Debug, Clone, Copy)]
struct TokenBucket {
    tokens: f64,
    last_update: Instant,
}

impl TokenBucket {
    fn new(capacity: f64, now: Instant) -> Self {
        Self {
            tokens: capacity,
            last_update: now,
        }
    }

    fn try_acquire(&mut self, capacity: f64, refill_rate: f64, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_update).as_secs_f64();

        self.tokens = (self.tokens + elapsed * refill_rate).min(capacity);
        self.last_update = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Token buckets keyed by client IP.
#[derive(Debug, Default)]
pub struct RateLimiter {
    buckets: DashMap<IpAddr, TokenBucket>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take one token for `client`. `false` means the request is over the limit.
    pub fn check(&self, client: IpAddr, settings: &RateLimitConfig) -> bool {
        self.check_at(client, settings, Instant::now())
    }

    fn check_at(&self, client: IpAddr, settings: &RateLimitConfig, now: Instant) -> bool {
        if !settings.enabled {
            return true;
        }
        let capacity = f64::from(settings.burst_size);
        self.buckets
            .entry(client)
            .or_insert_with(|| TokenBucket::new(capacity, now))
            .try_acquire(capacity, settings.requests_per_second, now)
    }

    /// Forget clients idle for a while.
    pub fn prune(&self) {
        let now = Instant::now();
        self.buckets
            .retain(|_, bucket| now.saturating_duration_since(bucket.last_update) < IDLE_EVICTION);
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.buckets.len()
    }
}

/// Client IP from the connection, or the unspecified address when the
/// service runs without connect info (in-process tests).
pub fn client_ip(request: &Request<Body>) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Middleware limiting form submissions per client.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() != Method::POST {
        return next.run(request).await;
    }

    let client = client_ip(&request);
    let settings = state.inner.load().config.rate_limit.clone();

    if state.limiter.check(client, &settings) {
        return next.run(request).await;
    }

    tracing::warn!(client = %client, path = %request.uri().path(), "Rate limit exceeded");
    metrics::record_rate_limited("form_submission");
    state.stats.record_rate_limited();

    let retry_after = (1.0 / settings.requests_per_second).ceil().max(1.0) as u64;
    let mut response = (StatusCode::TOO_MANY_REQUESTS, "Too many submissions, please try again later.")
        .into_response();
    response
        .headers_mut()
        .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
    response
}
