//! Shared utilities for integration and load testing.

use std::net::SocketAddr;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uno_site::config::SiteConfig;
use uno_site::http::HttpServer;
use uno_site::lifecycle::Shutdown;

/// A site server running on an ephemeral loopback port.
pub struct TestSite {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    #[allow(dead_code)]
    pub config_updates: mpsc::UnboundedSender<SiteConfig>,
    #[allow(dead_code)]
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestSite {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the server with `config`, listening on `127.0.0.1:0`.
pub async fn spawn_site(mut config: SiteConfig) -> TestSite {
    config.listener.bind_address = "127.0.0.1:0".into();
    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (config_updates, updates_rx) = mpsc::unbounded_channel();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move { server.run(listener, updates_rx, server_shutdown).await });

    TestSite {
        addr,
        shutdown,
        config_updates,
        handle,
    }
}

/// A client that does not follow redirects and keeps no connection pool.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .build()
        .unwrap()
}
