//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (in-flight cap, body size)
//!     → rate_limit.rs (per-IP limit on form submissions)
//!     → handler
//! Outgoing response:
//!     → headers.rs (nosniff, frame and referrer policy)
//! ```

pub mod headers;
pub mod limits;
pub mod rate_limit;

pub use rate_limit::{rate_limit_middleware, RateLimiter};
