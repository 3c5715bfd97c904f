//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use dashpush_domain::error::DashError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`DashError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(DashError);

impl From<DashError> for ApiError {
    fn from(err: DashError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DashError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            DashError::MalformedPayload(_) => {
                tracing::warn!(error = %self.0.detail(), "malformed payload");
                (StatusCode::BAD_REQUEST, self.0.detail())
            }
            DashError::Storage(_) => {
                tracing::error!(error = %self.0.detail(), "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.detail())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
