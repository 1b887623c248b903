use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Request-level failure. Upstream fetch errors bubble up here unchanged
/// and turn into a generic 500 answer; nothing is retried or partially
/// rendered.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
