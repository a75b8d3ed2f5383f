//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (bind)
//!     → tls.rs (optional TLS handshake, via axum-server)
//!     → Hand off to HTTP layer
//! ```

pub mod listener;
pub mod tls;

pub use listener::{bind, ListenerError};
