//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use notekeep_domain::error::NotekeepError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

/// Maps request-handling failures to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// A domain-level failure (validation, not found, storage).
    Domain(NotekeepError),
    /// The request body was non-empty but not valid JSON.
    InvalidJson,
    /// A mutating method was dispatched without a usable identifier.
    MissingId {
        /// The operation the identifier was required for.
        action: &'static str,
    },
}

impl From<NotekeepError> for ApiError {
    fn from(err: NotekeepError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(NotekeepError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(NotekeepError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(NotekeepError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::InvalidJson => (StatusCode::BAD_REQUEST, "Invalid JSON body".to_string()),
            Self::MissingId { action } => {
                (StatusCode::BAD_REQUEST, format!("ID required for {action}"))
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
