//! Request and connection limits.
//!
//! - Request bodies above `security.max_body_size` get `413 Payload Too Large`
//! - At most `listener.max_connections` requests are in flight at once;
//!   requests beyond that get `503 Service Unavailable`

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Semaphore;
use tower_http::limit::RequestBodyLimitLayer;

use crate::config::SiteConfig;

pub fn body_limit(config: &SiteConfig) -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(config.security.max_body_size)
}

/// Slots for requests being handled.
#[derive(Debug, Clone)]
pub struct InFlightLimit {
    slots: Arc<Semaphore>,
    max: usize,
}

impl InFlightLimit {
    pub fn new(max: usize) -> Self {
        Self {
            slots: Arc::new(Semaphore::new(max)),
            max,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.listener.max_connections)
    }

    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

/// Hold a slot for the lifetime of the request, or shed it when none is free.
pub async fn in_flight_middleware(
    State(limit): State<InFlightLimit>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // The permit is released when dropped.
    let Ok(_permit) = limit.slots.clone().try_acquire_owned() else {
        tracing::warn!(max = limit.max, "in-flight limit reached, shedding request");
        crate::observability::metrics::record_rate_limited("in_flight");
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;

    use super::*;

    fn slow_app(limit: InFlightLimit) -> Router {
        Router::new()
            .route(
                "/",
                get(|| async {
                    tokio::time::sleep(Duration::from_millis(500)).await;
                    "done"
                }),
            )
            .layer(middleware::from_fn_with_state(limit, in_flight_middleware))
    }

    fn request() -> Request<Body> {
        Request::builder().uri("/").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn requests_beyond_the_cap_are_shed() {
        let limit = InFlightLimit::new(1);
        let app = slow_app(limit.clone());

        let first = tokio::spawn(app.clone().oneshot(request()));
        while limit.available() > 0 {
            tokio::task::yield_now().await;
        }

        let second = tokio::time::timeout(Duration::from_millis(200), app.clone().oneshot(request()))
            .await
            .expect("over-cap request must not queue")
            .unwrap();
        assert_eq!(second.status(), StatusCode::SERVICE_UNAVAILABLE);

        let first = first.await.unwrap().unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(limit.available(), 1);

        let third = app.oneshot(request()).await.unwrap();
        assert_eq!(third.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn permits_return_after_use() {
        let limit = InFlightLimit::new(2);
        {
            let _a = limit.slots.clone().acquire_owned().await.unwrap();
            assert_eq!(limit.available(), 1);
        }
        assert_eq!(limit.available(), limit.max());
    }
}
