use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::error::UseCaseError;

#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

pub fn success<T: Serialize>(data: T) -> Json<SuccessResponse<T>> {
    Json(SuccessResponse {
        success: true,
        data,
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct AppError {
    status: StatusCode,
    code: &'static str,
    message: String,
    is_operational: bool,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::operational(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::operational(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
    }

    pub fn no_words_available(message: impl Into<String>) -> Self {
        Self::operational(StatusCode::NOT_FOUND, "NO_WORDS_AVAILABLE", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::operational(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::operational(StatusCode::FORBIDDEN, "FORBIDDEN", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL_ERROR",
            message: message.into(),
            is_operational: false,
        }
    }

    fn operational(
        status: StatusCode,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            is_operational: true,
        }
    }
}

impl From<UseCaseError> for AppError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::NotFound(message) => Self::not_found(message),
            UseCaseError::Validation(message) => Self::validation(message),
            UseCaseError::NoWordsAvailable(message) => Self::no_words_available(message),
            UseCaseError::Unauthorized(message) => Self::unauthorized(message),
            UseCaseError::Forbidden(message) => Self::forbidden(message),
            UseCaseError::Internal(message) => Self::internal(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Infrastructure details stay in the logs, not on the wire.
        let message = if self.is_operational {
            self.message
        } else {
            tracing::error!(error = %self.message, "internal error");
            "internal server error".to_string()
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: self.code.to_string(),
        };

        (self.status, Json(body)).into_response()
    }
}
