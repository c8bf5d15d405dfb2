//! HTTP error mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::ColorError;

/// Result type for handlers.
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed body or color value.
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        hint: Option<String>,
    },

    /// Well-formed request with an unacceptable parameter.
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        hint: Option<String>,
    },

    /// Payload too large.
    #[error("Payload too large")]
    PayloadTooLarge,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            hint: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            hint: None,
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// Get the error code string.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad_request",
            Self::Validation { .. } => "validation_error",
            Self::PayloadTooLarge => "payload_too_large",
        }
    }

    fn hint(&self) -> Option<&str> {
        match self {
            Self::BadRequest { hint, .. } | Self::Validation { hint, .. } => hint.as_deref(),
            Self::PayloadTooLarge => None,
        }
    }
}

impl From<ColorError> for AppError {
    fn from(err: ColorError) -> Self {
        let hint = Some(err.user_message());
        let message = err.to_string();
        match err {
            ColorError::Format { .. } => Self::BadRequest { message, hint },
            ColorError::Validation { .. } => Self::Validation { message, hint },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge;
        }
        Self::bad_request(rejection.body_text())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                hint: self.hint().map(String::from),
            },
        };
        debug!(status = status.as_u16(), code = %body.error.code, "request rejected");

        (status, Json(body)).into_response()
    }
}
