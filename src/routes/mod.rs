//! HTTP route handlers.
//!
//! There is exactly one behavior: every GET, no matter the path or query
//! string, is answered by the greeting handler. The router therefore uses a
//! GET fallback instead of per-path routes; other methods fall through to
//! axum's default 405 response.

pub mod greeting;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Creates the Axum router.
pub fn create_router() -> Router {
    Router::new()
        .fallback(get(greeting::respond))
        .layer(TraceLayer::new_for_http())
}
