//! Bearer-protected JSON API for operators, served on its own address.

pub mod auth;
pub mod handlers;

use axum::{middleware, routing::get, Router};

use self::auth::admin_auth_middleware;
use self::handlers::*;
use crate::http::server::AppState;

pub fn setup_admin_router(state: AppState) -> Router {
    Router::new()
        .route("/admin/status", get(get_status))
        .route("/admin/content", get(get_content))
        .route("/admin/routes", get(get_routes))
        .route("/admin/forms", get(get_forms))
        .layer(middleware::from_fn_with_state(state.clone(), admin_auth_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::SiteConfig;

    fn state() -> AppState {
        let mut config = SiteConfig::default();
        config.admin.enabled = true;
        config.admin.api_key = "test-key".into();
        AppState::new(config)
    }

    fn request(path: &str, key: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(key) = key {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {key}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn rejects_missing_or_wrong_key() {
        let app = setup_admin_router(state());
        let response = app.clone().oneshot(request("/admin/status", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app.oneshot(request("/admin/status", Some("nope"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn routes_lists_every_path() {
        let app = setup_admin_router(state());
        let response = app
            .oneshot(request("/admin/routes", Some("test-key")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let paths: Vec<String> = serde_json::from_slice(&body).unwrap();
        assert!(paths.contains(&"/work/ai-powered-logistics-optimization".to_string()));
        assert!(paths.contains(&"/insights/future-enterprise-ai-trends-2025".to_string()));
    }

    #[tokio::test]
    async fn forms_reports_counters() {
        let state = state();
        state.stats.record_subscription();
        let app = setup_admin_router(state);
        let response = app
            .oneshot(request("/admin/forms", Some("test-key")))
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["newsletter_subscriptions"], 1);
        assert_eq!(json["contact_submissions"], 0);
    }
}
