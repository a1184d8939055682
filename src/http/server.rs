//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;

use crate::config::{BIND_HOST, BIND_PORT};

use super::shutdown;

/// Server startup error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid bind address: {0}")]
    Addr(#[from] std::net::AddrParseError),

    #[error("Failed to bind server: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start the HTTP server on the fixed bind address.
///
/// Blocks until an interrupt signal arrives and the serve loop winds down.
/// A bind failure is fatal and propagates to the caller before any request
/// is served.
pub async fn start_server(app: Router) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", BIND_HOST, BIND_PORT).parse()?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Bind)?;
    tracing::info!("Serving on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Shutting down...");
    Ok(())
}
