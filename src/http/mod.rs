//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → handlers.rs (resolve path, validate forms, render)
//!     → response.rs (HTML, redirects, documents)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer, SiteStats, StatsSnapshot};
