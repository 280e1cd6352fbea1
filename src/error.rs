use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    pub fn validation(message: impl Into<String>) -> Self {
        RegistryError::Validation {
            message: message.into(),
        }
    }

    pub fn business_not_found(id: impl ToString) -> Self {
        RegistryError::NotFound {
            resource: "Business",
            id: id.to_string(),
        }
    }

    /// Machine-readable kind reported in error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::Validation { .. } => "validation_error",
            RegistryError::NotFound { .. } => "not_found",
            RegistryError::Conflict { .. } => "conflict",
            RegistryError::Internal(_) => "internal_error",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            RegistryError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            RegistryError::NotFound { resource, .. } => {
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            RegistryError::Conflict { message } => (StatusCode::CONFLICT, message.clone()),
            RegistryError::Internal(cause) => {
                // Storage detail stays in the log
                error!("Internal registry failure: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: self.kind().to_string(),
            detail,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for RegistryError {
    fn from(rejection: JsonRejection) -> Self {
        RegistryError::validation(rejection.body_text())
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Internal(format!("Serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
