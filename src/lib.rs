//! Uno Digit site server library

pub mod admin;
pub mod config;
pub mod content;
pub mod forms;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod pages;
pub mod routing;
pub mod security;
pub mod seo;

pub use config::schema::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
