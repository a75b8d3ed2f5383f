//! Server-rendered pages.
//!
//! Every page is a pure function of the site identity, the content catalog
//! and, for the two pages carrying a form, that form's state. Rendering
//! never fails.

pub mod about;
pub mod components;
pub mod contact;
pub mod home;
pub mod insights;
pub mod layout;
pub mod not_found;
pub mod services;
pub mod work;

use maud::Markup;

use crate::config::SiteIdentity;
use crate::content::Catalog;
use crate::forms::{ContactForm, FormState, NewsletterForm};
use crate::routing::Route;

pub use layout::PageContext;

/// Form state handed to the page being rendered.
#[derive(Debug, Default)]
pub enum Forms {
    #[default]
    Fresh,
    Contact(FormState<ContactForm>),
    Newsletter(FormState<NewsletterForm>),
}

/// Render the page a route resolved to.
pub fn render(site: &SiteIdentity, catalog: &Catalog, route: Route, forms: Forms) -> Markup {
    let ctx = PageContext::new(site, route.section());
    match route {
        Route::Home => home::render(&ctx, catalog),
        Route::About => about::render(&ctx, catalog),
        Route::Services => services::render(&ctx, catalog),
        Route::Work => work::render_listing(&ctx, catalog),
        Route::Project(project) => work::render_project(&ctx, catalog, project),
        Route::Insights => {
            let state = match forms {
                Forms::Newsletter(state) => state,
                _ => FormState::idle(),
            };
            insights::render_listing(&ctx, catalog, &state)
        }
        Route::Article(article) => insights::render_article(&ctx, catalog, article),
        Route::Contact => {
            let state = match forms {
                Forms::Contact(state) => state,
                _ => FormState::idle(),
            };
            contact::render(&ctx, &state)
        }
    }
}

pub fn render_not_found(site: &SiteIdentity, path: &str) -> Markup {
    // Not part of any section, so no navigation link is marked.
    let ctx = PageContext::new(site, "");
    not_found::render(&ctx, path)
}
