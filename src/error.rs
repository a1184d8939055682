use axum::response::{IntoResponse, Response};
use http::StatusCode;

/// Per-request failures while producing a response.
///
/// Both variants are practically unreachable for a fixed three-field payload,
/// but keep panics out of the handler path.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to encode response payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to build response: {0}")]
    Response(#[from] http::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Internal error: {:?}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
