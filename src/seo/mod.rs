//! Search engine and social sharing metadata.
//!
//! # Data Flow
//! ```text
//! page handler
//!     → meta.rs (per-page PageMeta: title, description, canonical, OG type)
//!     → schema.rs (JSON-LD document for the page)
//!     → PageMeta::render (head tags, absolute URLs from SiteIdentity)
//!
//! crawler endpoints:
//!     → sitemap.rs (sitemap.xml from SiteRouter::paths, robots.txt)
//! ```

pub mod meta;
pub mod schema;
pub mod sitemap;

pub use meta::{OgType, PageMeta};
