//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (route lookup)
//!     → matcher.rs (evaluate path patterns)
//!     → content catalog (slug lookup for detail pages)
//!     → Return: Page, Redirect to listing, or NotFound
//!
//! Route Compilation (at startup):
//!     page patterns
//!     → Compile segment matchers
//!     → Freeze as immutable SiteRouter
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same input always resolves the same way
//! - First match wins (declaration order)

pub mod matcher;
pub mod router;

pub use router::{Resolution, Route, SiteRouter};
