use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Error kinds surfaced by the API handlers.
///
/// The three client-error variants are deliberately distinct so that a
/// dangling reference or a budget against an income category reads
/// differently from a plain constraint failure.
#[derive(Debug)]
pub enum ApiError {
    /// Request body or query parameter fails a field constraint.
    Validation(String),
    /// A referenced account/category id does not resolve to a record.
    ReferenceNotFound(String),
    /// Budget created against a category that is not expense-typed.
    InvalidCategoryType(String),
    /// The document store cannot be reached or a query failed.
    Dependency(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::ReferenceNotFound(msg) => write!(f, "Reference not found: {}", msg),
            ApiError::InvalidCategoryType(msg) => write!(f, "Invalid category type: {}", msg),
            ApiError::Dependency(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Dependency(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_)
            | ApiError::ReferenceNotFound(_)
            | ApiError::InvalidCategoryType(_) => StatusCode::BAD_REQUEST,
            ApiError::Dependency(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let detail = match self {
            ApiError::Validation(msg)
            | ApiError::ReferenceNotFound(msg)
            | ApiError::InvalidCategoryType(msg)
            | ApiError::Dependency(msg) => msg,
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
