//! Static site content.
//!
//! # Data Flow
//! ```text
//! articles.rs / projects.rs / services.rs (compiled-in records)
//!     → catalog.rs (CATALOG: lookup by slug, related items)
//!     → verified once at startup (slug.rs rules, uniqueness)
//!     → borrowed as &'static by routing and pages
//! ```
//!
//! # Design Decisions
//! - Records are `'static` and immutable; nothing is created at runtime
//! - Lookup is a linear scan; lists are small and fixed
//! - An unknown slug is `None`, the router turns it into a redirect

pub mod articles;
pub mod catalog;
pub mod projects;
pub mod services;
pub mod slug;

pub use catalog::{Catalog, ContentError, CATALOG};
pub use slug::validate_slug;

/// A unit of rendered body content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    Heading(&'static str),
    /// Label/text pairs rendered as a list with a bold lead-in.
    Highlights(&'static [(&'static str, &'static str)]),
}

/// An insight article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Display date, e.g. "Dec 15, 2024".
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub body: &'static [Block],
}

/// A case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub client: Option<&'static str>,
    pub category: &'static str,
    /// Result headline, e.g. "40% reduction in delivery costs".
    pub result: &'static str,
    pub description: &'static str,
    /// Empty when the project carries no tags.
    pub tags: &'static [&'static str],
    pub body: &'static [Block],
}

/// Anything addressable by a slug.
pub trait Slugged {
    fn slug(&self) -> &'static str;
}

impl Slugged for Article {
    fn slug(&self) -> &'static str {
        self.slug
    }
}

impl Slugged for Project {
    fn slug(&self) -> &'static str {
        self.slug
    }
}

/// Linear search for the record with the given slug.
pub fn find_by_slug<'a, T, I>(items: I, slug: &str) -> Option<&'a T>
where
    T: Slugged + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().find(|item| item.slug() == slug)
}
