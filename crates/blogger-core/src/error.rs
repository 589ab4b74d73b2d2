//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business rule failures raised by the service layer.
///
/// Display strings double as the response bodies emitted at the HTTP
/// boundary, so they are worded for clients.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Category not found with id: '{0}'")]
    CategoryNotFound(Uuid),

    #[error("Category not found with name: '{0}'")]
    CategoryNameNotFound(String),

    #[error("Post not found with id: '{0}'")]
    PostNotFound(Uuid),

    #[error("Category with name '{0}' already exists")]
    DuplicateCategoryName(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}
