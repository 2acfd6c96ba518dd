use crate::error::app_error::AppError;
use crate::error::validation_mapping::{collect_validation_issues, order_issues, summarize_issues};

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::StorageUnavailable(err.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::from_validation(err, &[])
    }
}

impl AppError {
    /// Builds a validation error whose issues follow `field_order`; fields not
    /// listed there come after it, alphabetically.
    pub fn from_validation(err: validator::ValidationErrors, field_order: &[&str]) -> Self {
        let mut issues = Vec::new();
        collect_validation_issues(None, &err, &mut issues);
        order_issues(&mut issues, field_order);

        let message = summarize_issues(&issues);
        AppError::ValidationError { message, issues }
    }
}
