//! Application error type mapping to HTTP status codes and the
//! `{success, message}` envelope every non-2xx response carries.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Response envelope shared by success acknowledgements and errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusMessage {
    pub success: bool,
    pub message: String,
}

impl StatusMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing required field.
    #[error("{0}")]
    Validation(String),
    /// No matching row.
    #[error("{0}")]
    NotFound(String),
    /// Password mismatch.
    #[error("{0}")]
    Unauthorized(String),
    /// Store, hashing or signing failure, or malformed stored data.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = StatusMessage {
            success: false,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        let cases = [
            (ApiError::Validation("v".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("n".into()), StatusCode::NOT_FOUND),
            (ApiError::Unauthorized("u".into()), StatusCode::UNAUTHORIZED),
            (
                ApiError::Internal("i".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn error_body_is_failure_envelope() {
        let err = ApiError::NotFound("Sport not found".into());
        assert_eq!(err.to_string(), "Sport not found");
        let body = StatusMessage {
            success: false,
            message: err.to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Sport not found");
    }
}
