use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

use crate::response;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl WebError {
    /// Turn a repository `NotFound` into a 404 with an entity-specific
    /// message, leaving every other storage error untouched.
    pub fn map_not_found(err: StorageError, message: &str) -> WebError {
        match err {
            StorageError::NotFound => WebError::NotFound(message.to_string()),
            other => WebError::Storage(other),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::Storage(StorageError::NotFound) => {
                response::failure(StatusCode::NOT_FOUND, "Resource not found")
            }
            Self::Storage(StorageError::ConstraintViolation(msg))
            | Self::Storage(StorageError::RuleViolation(msg)) => {
                response::failure(StatusCode::BAD_REQUEST, msg)
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                response::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred",
                )
            }
            Self::Validation(errors) => {
                let details: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                response::failure(StatusCode::BAD_REQUEST, details.join("; "))
            }
            Self::BadRequest(msg) => response::failure(StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => response::failure(StatusCode::UNAUTHORIZED, msg),
            Self::Forbidden(msg) => response::failure(StatusCode::FORBIDDEN, msg),
            Self::NotFound(msg) => response::failure(StatusCode::NOT_FOUND, msg),
        }
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
