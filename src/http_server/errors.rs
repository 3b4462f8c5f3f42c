//! API error taxonomy
//!
//! Three client-visible failure classes: missing required field (400),
//! unknown id on update/delete (404), and any storage failure (500 with a
//! generic message). Storage causes are logged server-side and never
//! surfaced.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Body shape for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("hoTen and ngaySinh are required.")]
    MissingRequiredFields,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Internal server error.")]
    Storage(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingRequiredFields => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(cause) = &self {
            // Runs inside the request span, so method and path are attached.
            error!(error = %cause, "storage failure");
        }

        let body = Json(ErrorResponse {
            message: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::MissingRequiredFields.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("No patient found to update.").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Storage(StoreError::Database("boom".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_message_stays_generic() {
        let err = ApiError::Storage(StoreError::Database("connection refused".to_string()));
        assert_eq!(err.to_string(), "Internal server error.");
    }

    #[test]
    fn test_error_body_serialization() {
        let body = ErrorResponse {
            message: "hoTen and ngaySinh are required.".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "hoTen and ngaySinh are required.");
    }
}
