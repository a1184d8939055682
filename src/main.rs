//! Hello-docker: a demonstration HTTP greeting service.
//!
//! This is the application entry point. It initializes tracing, builds the
//! Axum router, and starts the HTTP server on the fixed bind address. The
//! process runs until SIGINT or SIGTERM, then exits 0.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_docker::config::DEFAULT_LOG_FILTER;
use hello_docker::http::start_server;
use hello_docker::routes::create_router;

// The original lab server handles one request at a time; the current_thread
// flavor keeps that single-threaded execution model.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = create_router();

    start_server(app).await?;

    Ok(())
}
