//! # API Errors
//!
//! Request-terminating failures for the HTTP surface. All variants are
//! per-request; the caller recovers by issuing a corrected request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Validation failure from query composition
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Postal filter failed the structural shape check
    #[error("{0} is not a valid postal code filter")]
    InvalidPostal(String),

    /// Unrecognized or unparsable query parameter
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Missing required parameter
    #[error("Missing required parameter: {0}")]
    MissingParam(String),

    /// Limit exceeds maximum
    #[error("Limit {0} exceeds maximum {1}")]
    LimitExceeded(usize, usize),

    /// Identifier lookup missed
    #[error("{0} is not an id of a brewery in this dataset")]
    NotFound(u64),

    /// Search term matched zero records
    #[error("'{0}' didn't return anything")]
    NoMatch(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // The closed-enum miss is a semantic failure, per the original
            // service contract; the rest of the validation errors are 400s
            ApiError::Query(QueryError::InvalidEnumValue(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Query(_) => StatusCode::BAD_REQUEST,

            ApiError::InvalidPostal(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::LimitExceeded(_, _) => StatusCode::BAD_REQUEST,

            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NoMatch(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
