//! API error responses, serialized as `{"detail": message}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use dataset_store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Upload failed: {0}")]
    Upload(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnsupportedFileType(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upload(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::UnsupportedFileType("txt".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::NotFound("x".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Upload("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::UnsupportedFileType("txt".to_string()).to_string(),
            "Unsupported file type: txt"
        );
        assert_eq!(
            ApiError::Upload("bad csv".to_string()).to_string(),
            "Upload failed: bad csv"
        );
    }
}
