//! TCP listener binding.
//!
//! Connection backpressure is enforced one layer up, as a global limit on
//! in-flight requests sized by `listener.max_connections`.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("Invalid bind address {address}: {source}")]
    InvalidAddress {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },
}

/// Bind a TCP listener to `address` (`host:port`).
pub async fn bind(address: &str) -> Result<TcpListener, ListenerError> {
    let addr: SocketAddr = address.parse().map_err(|source| ListenerError::InvalidAddress {
        address: address.to_string(),
        source,
    })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { address: addr, source })?;

    if let Ok(local) = listener.local_addr() {
        tracing::info!(address = %local, "Listener bound");
    }
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let listener = bind("127.0.0.1:0").await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn rejects_garbage_address() {
        let err = bind("not-an-address").await.unwrap_err();
        assert!(matches!(err, ListenerError::InvalidAddress { .. }));
    }
}
