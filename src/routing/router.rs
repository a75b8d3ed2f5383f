//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled page patterns
//! - Resolve a request path to a page, a redirect or an explicit no-match
//! - Enumerate every routable path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) pattern scan (acceptable for a handful of routes)
//! - A dynamic route with an unknown slug redirects to its listing page

use crate::content::{Article, Catalog, Project, CATALOG};
use crate::routing::matcher::PathPattern;

pub const HOME_PATH: &str = "/";
pub const ABOUT_PATH: &str = "/about";
pub const SERVICES_PATH: &str = "/services";
pub const WORK_PATH: &str = "/work";
pub const INSIGHTS_PATH: &str = "/insights";
pub const CONTACT_PATH: &str = "/contact";

/// Primary navigation, in display order. Contact is a separate call to action.
pub const NAV_LINKS: &[(&str, &str)] = &[
    (HOME_PATH, "Home"),
    (ABOUT_PATH, "About"),
    (SERVICES_PATH, "Services"),
    (WORK_PATH, "Work"),
    (INSIGHTS_PATH, "Insights"),
];

/// A resolved page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    Work,
    Project(&'static Project),
    Insights,
    Article(&'static Article),
    Contact,
}

impl Route {
    /// Stable label for logs and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Services => "services",
            Route::Work => "work",
            Route::Project(_) => "project",
            Route::Insights => "insights",
            Route::Article(_) => "article",
            Route::Contact => "contact",
        }
    }

    /// Canonical path of this page.
    pub fn path(&self) -> String {
        match self {
            Route::Home => HOME_PATH.to_string(),
            Route::About => ABOUT_PATH.to_string(),
            Route::Services => SERVICES_PATH.to_string(),
            Route::Work => WORK_PATH.to_string(),
            Route::Project(p) => project_path(p.slug),
            Route::Insights => INSIGHTS_PATH.to_string(),
            Route::Article(a) => article_path(a.slug),
            Route::Contact => CONTACT_PATH.to_string(),
        }
    }

    /// The top-level section this page belongs to, for navigation highlighting.
    pub fn section(&self) -> &'static str {
        match self {
            Route::Home => HOME_PATH,
            Route::About => ABOUT_PATH,
            Route::Services => SERVICES_PATH,
            Route::Work | Route::Project(_) => WORK_PATH,
            Route::Insights | Route::Article(_) => INSIGHTS_PATH,
            Route::Contact => CONTACT_PATH,
        }
    }
}

pub fn article_path(slug: &str) -> String {
    format!("{}/{}", INSIGHTS_PATH, slug)
}

pub fn project_path(slug: &str) -> String {
    format!("{}/{}", WORK_PATH, slug)
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Page(Route),
    /// The slug did not name a record; go to this listing page instead.
    Redirect(&'static str),
    NotFound,
}

#[derive(Debug, Clone, Copy)]
enum Target {
    Static(Route),
    Article,
    Project,
}

/// Maps paths to pages over a content catalog.
#[derive(Debug)]
pub struct SiteRouter {
    catalog: &'static Catalog,
    routes: Vec<(PathPattern, Target)>,
}

impl SiteRouter {
    pub fn new(catalog: &'static Catalog) -> Self {
        let routes = vec![
            (PathPattern::new(HOME_PATH), Target::Static(Route::Home)),
            (PathPattern::new(ABOUT_PATH), Target::Static(Route::About)),
            (PathPattern::new(SERVICES_PATH), Target::Static(Route::Services)),
            (PathPattern::new(WORK_PATH), Target::Static(Route::Work)),
            (PathPattern::new("/work/{slug}"), Target::Project),
            (PathPattern::new(INSIGHTS_PATH), Target::Static(Route::Insights)),
            (PathPattern::new("/insights/{slug}"), Target::Article),
            (PathPattern::new(CONTACT_PATH), Target::Static(Route::Contact)),
        ];
        Self { catalog, routes }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Resolve a request path. First matching pattern wins.
    pub fn resolve(&self, path: &str) -> Resolution {
        for (pattern, target) in &self.routes {
            let Some(captures) = pattern.matches(path) else {
                continue;
            };
            let slug = captures.get("slug").unwrap_or_default();
            return match target {
                Target::Static(route) => Resolution::Page(*route),
                Target::Article => match self.catalog.find_article(slug) {
                    Some(article) => Resolution::Page(Route::Article(article)),
                    None => Resolution::Redirect(INSIGHTS_PATH),
                },
                Target::Project => match self.catalog.find_project(slug) {
                    Some(project) => Resolution::Page(Route::Project(project)),
                    None => Resolution::Redirect(WORK_PATH),
                },
            };
        }
        Resolution::NotFound
    }

    /// Every page the site serves, static pages first.
    pub fn pages(&self) -> Vec<Route> {
        let mut pages = vec![
            Route::Home,
            Route::About,
            Route::Services,
            Route::Work,
            Route::Insights,
            Route::Contact,
        ];
        pages.extend(self.catalog.all_projects().map(Route::Project));
        pages.extend(self.catalog.articles.iter().map(Route::Article));
        pages
    }

    /// Every routable path.
    pub fn paths(&self) -> Vec<String> {
        self.pages().iter().map(Route::path).collect()
    }
}

impl Default for SiteRouter {
    fn default() -> Self {
        Self::new(&CATALOG)
    }
}
