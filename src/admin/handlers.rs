use axum::{extract::State, Json};
use serde::Serialize;

use crate::http::server::{AppState, StatsSnapshot};

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub uptime_secs: u64,
    pub site: String,
}

#[derive(Debug, Serialize)]
pub struct ContentSummary {
    pub featured_case: &'static str,
    pub projects: Vec<&'static str>,
    pub articles: Vec<&'static str>,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let inner = state.inner.load();
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        uptime_secs: state.started_at.elapsed().as_secs(),
        site: inner.config.site.url.clone(),
    })
}

pub async fn get_content(State(state): State<AppState>) -> Json<ContentSummary> {
    let catalog = state.router.catalog();
    Json(ContentSummary {
        featured_case: catalog.featured_case.slug,
        projects: catalog.all_projects().map(|p| p.slug).collect(),
        articles: catalog.articles.iter().map(|a| a.slug).collect(),
    })
}

pub async fn get_routes(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.router.paths())
}

pub async fn get_forms(State(state): State<AppState>) -> Json<StatsSnapshot> {
    Json(state.stats.snapshot())
}
