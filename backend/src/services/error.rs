//! Error types for the service layer.
//!
//! The service raises its own errors only for checks it alone performs;
//! repository errors pass through unchanged (transparent), so callers see
//! the original error kind.

use crate::db::RepositoryError;
use crate::models::UnknownEntityError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type for service operations
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A name outside the entity registry was used for schema or dispatch.
    #[error(transparent)]
    UnknownEntity(#[from] UnknownEntityError),

    /// A cross-entity business invariant failed.
    #[error("Business rule violated: {0}")]
    BusinessRule(String),

    /// A repository error, re-raised unchanged.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
