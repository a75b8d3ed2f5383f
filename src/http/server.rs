//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with page, form and document handlers
//! - Wire up middleware (request ID, tracing, limits, security headers)
//! - Serve plain TCP or TLS until shutdown
//! - Swap in reloaded configuration without dropping connections
//! - Run the admin API on its own listener when enabled

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::admin;
use crate::config::SiteConfig;
use crate::http::handlers;
use crate::http::request::{request_id_header, MakeRequestUuid, RequestIdExt};
use crate::http::response::PageName;
use crate::lifecycle::shutdown::wait_for;
use crate::net::{self, tls::load_tls_config};
use crate::observability::metrics;
use crate::routing::SiteRouter;
use crate::security::limits::{in_flight_middleware, InFlightLimit};
use crate::security::{self, rate_limit_middleware, RateLimiter};

/// The part of the server state replaced on configuration reload.
#[derive(Debug)]
pub struct SiteState {
    pub config: SiteConfig,
}

/// Counters reported by the admin API.
#[derive(Debug, Default)]
pub struct SiteStats {
    page_views: AtomicU64,
    contact_submissions: AtomicU64,
    newsletter_subscriptions: AtomicU64,
    rejected_submissions: AtomicU64,
    rate_limited: AtomicU64,
}

/// Point-in-time copy of [`SiteStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub page_views: u64,
    pub contact_submissions: u64,
    pub newsletter_subscriptions: u64,
    pub rejected_submissions: u64,
    pub rate_limited: u64,
}

impl SiteStats {
    pub fn record_page_view(&self) {
        self.page_views.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact(&self) {
        self.contact_submissions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_subscription(&self) {
        self.newsletter_subscriptions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected_submissions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rate_limited(&self) {
        self.rate_limited.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            page_views: self.page_views.load(Ordering::Relaxed),
            contact_submissions: self.contact_submissions.load(Ordering::Relaxed),
            newsletter_subscriptions: self.newsletter_subscriptions.load(Ordering::Relaxed),
            rejected_submissions: self.rejected_submissions.load(Ordering::Relaxed),
            rate_limited: self.rate_limited.load(Ordering::Relaxed),
        }
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<ArcSwap<SiteState>>,
    pub router: Arc<SiteRouter>,
    pub stats: Arc<SiteStats>,
    pub limiter: Arc<RateLimiter>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(SiteState { config })),
            router: Arc::new(SiteRouter::default()),
            stats: Arc::new(SiteStats::default()),
            limiter: Arc::new(RateLimiter::new()),
            started_at: Instant::now(),
        }
    }

    /// Replace the live configuration.
    pub fn apply_config(&self, config: SiteConfig) {
        let current = self.inner.load();
        if current.config.listener != config.listener || current.config.admin != config.admin {
            tracing::warn!("Listener and admin settings change only on restart");
        }
        if current.config.timeouts != config.timeouts || current.config.security != config.security {
            tracing::warn!("Timeout and body limit settings change only on restart");
        }
        self.inner.store(Arc::new(SiteState { config }));
        tracing::info!("Configuration reloaded");
    }
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Self {
        let state = AppState::new(config);
        let router = Self::build_router(state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers added last run first.
    #[allow(deprecated)]
    fn build_router(state: AppState) -> Router {
        let config = state.inner.load_full();
        let config = &config.config;

        let router = Router::new()
            .route("/", get(handlers::page))
            .route(
                "/contact",
                get(handlers::page).post(handlers::contact_submit),
            )
            .route(
                "/insights",
                get(handlers::page).post(handlers::newsletter_submit),
            )
            .route("/sitemap.xml", get(handlers::sitemap))
            .route("/robots.txt", get(handlers::robots))
            .route("/health", get(handlers::health))
            .route("/{*path}", get(handlers::page))
            .layer(middleware::from_fn_with_state(state.clone(), rate_limit_middleware))
            .layer(middleware::from_fn(track_request))
            .with_state(state)
            .layer(security::limits::body_limit(config))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn_with_state(
                InFlightLimit::from_config(config),
                in_flight_middleware,
            ))
            .layer(PropagateRequestIdLayer::new(request_id_header()))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request.request_id(),
                )
            }))
            .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid));

        if config.security.enable_headers {
            security::headers::apply(router)
        } else {
            router
        }
    }

    /// The router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared state, for inspection.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Configuration updates received on `config_updates` are applied live.
    /// Returns once `shutdown` fires and in-flight requests have drained or the
    /// grace period has passed.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<SiteConfig>,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let config = self.state.inner.load_full();
        let config = &config.config;
        let grace = Duration::from_secs(config.timeouts.shutdown_grace_secs);

        let reload_state = self.state.clone();
        let reload = tokio::spawn(async move {
            while let Some(new_config) = config_updates.recv().await {
                reload_state.apply_config(new_config);
            }
        });

        let limiter = self.state.limiter.clone();
        let prune = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(60));
            loop {
                interval.tick().await;
                limiter.prune();
            }
        });
        let _background = BackgroundTasks(vec![reload, prune]);

        if config.admin.enabled {
            let admin_listener = net::bind(&config.admin.bind_address)
                .await
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::AddrNotAvailable, e))?;
            let admin_app = admin::setup_admin_router(self.state.clone());
            let admin_shutdown = shutdown.resubscribe();
            tokio::spawn(async move {
                tracing::info!(address = ?admin_listener.local_addr().ok(), "Admin API starting");
                if let Err(e) = axum::serve(admin_listener, admin_app)
                    .with_graceful_shutdown(wait_for(admin_shutdown))
                    .await
                {
                    tracing::error!(error = %e, "Admin API failed");
                }
            });
        }

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        match &config.listener.tls {
            Some(tls) => {
                let rustls = load_tls_config(tls).await?;
                tracing::info!(address = %addr, "HTTPS server starting");

                let handle = axum_server::Handle::new();
                let drain = handle.clone();
                tokio::spawn(async move {
                    wait_for(shutdown).await;
                    drain.graceful_shutdown(Some(grace));
                });

                axum_server::from_tcp_rustls(listener.into_std()?, rustls)
                    .handle(handle)
                    .serve(app)
                    .await?;
            }
            None => {
                tracing::info!(address = %addr, "HTTP server starting");

                let drain_signal = shutdown.resubscribe();
                let mut server = tokio::spawn(async move {
                    axum::serve(listener, app)
                        .with_graceful_shutdown(wait_for(shutdown))
                        .await
                });

                tokio::select! {
                    result = &mut server => flatten(result)?,
                    _ = wait_for(drain_signal) => {
                        match tokio::time::timeout(grace, &mut server).await {
                            Ok(result) => flatten(result)?,
                            Err(_) => {
                                tracing::warn!(grace_secs = grace.as_secs(), "Grace period expired, closing remaining connections");
                                server.abort();
                            }
                        }
                    }
                }
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Tasks that live as long as `run`; aborted on every exit path.
struct BackgroundTasks(Vec<JoinHandle<()>>);

impl Drop for BackgroundTasks {
    fn drop(&mut self) {
        for task in &self.0 {
            task.abort();
        }
    }
}

fn flatten(
    result: Result<Result<(), std::io::Error>, tokio::task::JoinError>,
) -> Result<(), std::io::Error> {
    result.map_err(std::io::Error::other)?
}

/// Record request count and latency for every response.
async fn track_request(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let response = next.run(request).await;
    let status = response.status();

    metrics::record_request(&method, status.as_u16(), start);
    if let Some(PageName(page)) = response.extensions().get::<PageName>() {
        metrics::record_page_view(page);
    }
    if status.is_server_error() {
        tracing::error!(status = %status, "Request failed");
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_snapshot_counts() {
        let stats = SiteStats::default();
        stats.record_page_view();
        stats.record_page_view();
        stats.record_contact();
        stats.record_rejected();
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.page_views, 2);
        assert_eq!(snapshot.contact_submissions, 1);
        assert_eq!(snapshot.rejected_submissions, 1);
        assert_eq!(snapshot.newsletter_subscriptions, 0);
    }

    #[test]
    fn reload_swaps_site_identity() {
        let state = AppState::new(SiteConfig::default());
        let mut updated = SiteConfig::default();
        updated.site.name = "Renamed".into();
        state.apply_config(updated);
        assert_eq!(state.inner.load().config.site.name, "Renamed");
    }

    #[tokio::test]
    async fn background_tasks_stop_with_the_server() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server = HttpServer::new(SiteConfig::default());
        let state = server.state().clone();
        let (updates, updates_rx) = mpsc::unbounded_channel();
        let (shutdown, shutdown_rx) = broadcast::channel(1);

        let handle = tokio::spawn(server.run(listener, updates_rx, shutdown_rx));
        tokio::task::yield_now().await;
        shutdown.send(()).unwrap();
        handle.await.unwrap().unwrap();

        tokio::time::timeout(Duration::from_secs(1), async {
            while !updates.is_closed() || Arc::strong_count(&state.limiter) > 1 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("reload and prune tasks outlived the server");
    }
}
