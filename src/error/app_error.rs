use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Body of every 500 that has no operation-specific message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub code: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        issues: Vec<ValidationIssue>,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The store cannot be reached or its schema cannot be created.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] sqlx::Error),

    /// A store operation failed; `message` is what the caller sees.
    #[error("{message}: {source}")]
    StorageError {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Database error: {0}")]
    DatabaseError(#[source] sqlx::Error),

    #[error("Internal server error")]
    InternalError(#[source] anyhow::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                code = self.error_code(),
                status = status.as_u16(),
                error = %self,
                detail = ?self,
                "request failed"
            );
        }

        let mut payload = serde_json::json!({
            "error": self.public_message(),
            "code": self.error_code(),
        });

        if let Some(issues) = self.validation_issues() {
            payload["details"] = serde_json::to_value(issues).unwrap_or_default();
        }

        HttpResponse::build(status).json(payload)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::StorageError { .. }
            | AppError::DatabaseError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError { .. } => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            AppError::StorageError { .. } => "STORAGE_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            issues: Vec::new(),
        }
    }

    /// Tags a raw store failure with the message reported for the operation.
    /// Errors that are not raw store failures pass through unchanged.
    pub fn with_storage_context(self, message: &'static str) -> Self {
        match self {
            AppError::DatabaseError(source) => AppError::StorageError { message, source },
            other => other,
        }
    }

    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError { message, .. } => message.clone(),
            AppError::BadRequest(message) | AppError::NotFound(message) => message.clone(),
            AppError::StorageUnavailable(_) => "Service temporarily unavailable".to_string(),
            AppError::StorageError { message, .. } => (*message).to_string(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }

    fn validation_issues(&self) -> Option<&[ValidationIssue]> {
        match self {
            AppError::ValidationError { issues, .. } if !issues.is_empty() => Some(issues),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
