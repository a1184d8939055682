//! Greeting handler.
//!
//! Serializes the payload by hand rather than returning `axum::Json` so the
//! `Content-Length` header is set explicitly from the encoded byte length,
//! matching what the response advertises even when the router is driven
//! without a real transport underneath.

use axum::body::Body;
use axum::response::Response;
use http::{header, StatusCode};

use crate::error::AppError;
use crate::payload::GreetingPayload;

/// GET (any path) — returns the greeting payload with a fresh timestamp.
pub async fn respond() -> Result<Response, AppError> {
    let body = serde_json::to_vec(&GreetingPayload::now())?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))?;

    Ok(response)
}
