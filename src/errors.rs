use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Terminal outcomes of a request. Handlers never retry internally; each
/// variant maps straight to a response.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed input (empty or oversized content).
    Validation(String),
    /// Well-formed content that trips the denylist.
    ContentPolicy(String),
    /// Fixed-window limit exceeded; the caller waits out the window.
    RateLimited,
    /// `scope=me` without a resolvable identity.
    Unauthorized,
    /// The persistence layer failed; the underlying message is surfaced.
    Storage(String),
    Internal(String),
}

/// Convert our custom errors to HTTP responses
///
/// `IntoResponse` trait: Axum calls this to convert errors to responses
/// This is how we control what users see when errors occur
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::ContentPolicy(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded".to_string(),
            ),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::Storage(msg) => {
                error!("Storage error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}
