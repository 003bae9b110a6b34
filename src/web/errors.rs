//! # Web API Error Types
//!
//! HTTP-facing errors and their response conversions. Every error renders as
//! `{"error": {"code": ..., "message": ...}}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error::{DispatchError, ValidationError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("JSON deserialization error")]
    JsonError,

    #[error("Service temporarily unavailable")]
    ServiceUnavailable,

    #[error("Internal server error")]
    Internal,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::JsonError => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (error_code, message) = match &self {
            ApiError::BadRequest { message } => ("BAD_REQUEST", message.as_str()),
            ApiError::JsonError => ("JSON_ERROR", "invalid JSON"),
            ApiError::ServiceUnavailable => {
                ("SERVICE_UNAVAILABLE", "service temporarily unavailable")
            }
            ApiError::Internal => ("INTERNAL_ERROR", "internal server error"),
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message
            }
        });

        (self.status_code(), Json(error_response)).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(_: serde_json::Error) -> Self {
        ApiError::JsonError
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

/// Admission rejections are transient; anything else is unexpected here
impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::QueueFull { .. } | DispatchError::ShuttingDown { .. } => {
                ApiError::ServiceUnavailable
            }
            _ => ApiError::Internal,
        }
    }
}
