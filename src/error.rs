//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache server.
///
/// Stores never produce these directly; they signal absence through `Option`.
/// The service layer raises `InvalidArgument`, the transport raises `NotFound`
/// when a store reports absence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Caller supplied a bad selector, count, key list or request body
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Key not present in the map, or the queue is empty
    #[error("Not found: {0}")]
    NotFound(String),

    /// Should be unreachable while the store invariants hold
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Extractor Rejections ==
impl From<JsonRejection> for CacheError {
    fn from(rejection: JsonRejection) -> Self {
        CacheError::InvalidArgument(rejection.body_text())
    }
}

impl From<PathRejection> for CacheError {
    fn from(rejection: PathRejection) -> Self {
        CacheError::InvalidArgument(rejection.body_text())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_maps_to_bad_request() {
        let response = CacheError::InvalidArgument("bad selector".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = CacheError::NotFound("queue is empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = CacheError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display() {
        let err = CacheError::InvalidArgument("count must not be negative".to_string());
        assert_eq!(err.to_string(), "Invalid argument: count must not be negative");
    }
}
