//! Request handlers for pages, forms and crawler documents.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde_json::json;

use crate::forms::{ContactForm, FormState, NewsletterForm};
use crate::http::response::{document, page as html_page, see_other};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::pages::{self, Forms};
use crate::routing::{Resolution, Route};
use crate::seo::sitemap::{robots_txt, sitemap_xml};

/// Render whatever page the path resolves to.
pub async fn page(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    let site = state.inner.load();

    match state.router.resolve(path) {
        Resolution::Page(route) => {
            tracing::debug!(page = route.name(), path, "Rendering page");
            state.stats.record_page_view();
            let markup = pages::render(&site.config.site, state.router.catalog(), route, Forms::Fresh);
            html_page(StatusCode::OK, route.name(), markup)
        }
        Resolution::Redirect(listing) => {
            tracing::info!(path, to = listing, "Unknown slug, redirecting to listing");
            metrics::record_redirect(listing.trim_start_matches('/'));
            see_other(listing)
        }
        Resolution::NotFound => {
            tracing::debug!(path, "No page matched");
            html_page(
                StatusCode::NOT_FOUND,
                "not_found",
                pages::render_not_found(&site.config.site, path),
            )
        }
    }
}

pub async fn contact_submit(State(state): State<AppState>, Form(draft): Form<ContactForm>) -> Response {
    let form = FormState::idle().submit(draft);
    let status = if let FormState::Submitted(request) = &form {
        tracing::info!(
            need = request.need.as_ref().map(|n| n.as_str()),
            budget = request.budget.as_ref().map(|b| b.as_str()),
            has_company = request.company.is_some(),
            "Contact enquiry received"
        );
        metrics::record_form_submission("contact", "accepted");
        state.stats.record_contact();
        StatusCode::OK
    } else {
        let errors = form.errors().map_or(0, |e| e.len());
        tracing::info!(errors, "Contact form rejected");
        metrics::record_form_submission("contact", "rejected");
        state.stats.record_rejected();
        StatusCode::UNPROCESSABLE_ENTITY
    };

    let site = state.inner.load();
    let markup = pages::render(
        &site.config.site,
        state.router.catalog(),
        Route::Contact,
        Forms::Contact(form),
    );
    html_page(status, Route::Contact.name(), markup)
}

pub async fn newsletter_submit(
    State(state): State<AppState>,
    Form(draft): Form<NewsletterForm>,
) -> Response {
    let form = FormState::idle().submit(draft);
    let status = if form.is_submitted() {
        tracing::info!("Newsletter subscription received");
        metrics::record_form_submission("newsletter", "accepted");
        state.stats.record_subscription();
        StatusCode::OK
    } else {
        tracing::info!("Newsletter signup rejected");
        metrics::record_form_submission("newsletter", "rejected");
        state.stats.record_rejected();
        StatusCode::UNPROCESSABLE_ENTITY
    };

    let site = state.inner.load();
    let markup = pages::render(
        &site.config.site,
        state.router.catalog(),
        Route::Insights,
        Forms::Newsletter(form),
    );
    html_page(status, Route::Insights.name(), markup)
}

pub async fn sitemap(State(state): State<AppState>) -> Response {
    let site = state.inner.load();
    document("application/xml", sitemap_xml(&site.config.site, &state.router))
}

pub async fn robots(State(state): State<AppState>) -> Response {
    let site = state.inner.load();
    document("text/plain; charset=utf-8", robots_txt(&site.config.site))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.started_at.elapsed().as_secs(),
    }))
}
