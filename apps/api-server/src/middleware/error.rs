//! Error handling - maps domain failures to status codes.
//!
//! Error responses carry plain-text bodies: the domain error message
//! verbatim for client faults, a generic message for internal failures.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blogger_core::DomainError;
use std::fmt;

/// Application-level error type produced at the HTTP boundary.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::Conflict(msg) => {
                write!(f, "{}", msg)
            }
            AppError::Internal(msg) => write!(f, "An unexpected error occurred: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) => tracing::warn!("[NOT FOUND] {}", msg),
            AppError::BadRequest(msg) => tracing::warn!("[BAD REQUEST] {}", msg),
            AppError::Conflict(msg) => tracing::warn!("[CONFLICT] {}", msg),
            AppError::Internal(msg) => tracing::error!("[INTERNAL SERVER ERROR] {}", msg),
        }

        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
            not_found @ (DomainError::CategoryNotFound(_)
            | DomainError::CategoryNameNotFound(_)
            | DomainError::PostNotFound(_)) => AppError::NotFound(not_found.to_string()),
            duplicate @ DomainError::DuplicateCategoryName(_) => {
                AppError::Conflict(duplicate.to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
