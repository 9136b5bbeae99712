//! Error types for repository operations.
//!
//! Storage-layer faults are caught at the repository boundary and mapped to
//! this taxonomy; the underlying driver's native error type never escapes.

use std::fmt;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Structured context for repository errors.
///
/// Provides additional information about where and why an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "add", "delete")
    pub operation: Option<String>,
    /// The entity type involved (e.g., "client", "routine")
    pub entity: Option<String>,
    /// The entity ID if applicable
    pub entity_id: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the entity type.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Set the entity ID.
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("id={}", id));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A lookup, update or delete targeted a non-existent identity.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// A uniqueness constraint was violated on insert.
    #[error("Duplicate record: {message} {context}")]
    Duplicate {
        message: String,
        context: ErrorContext,
    },

    /// The operation was blocked by a dependent row (foreign key).
    #[error("Referential integrity: {message} {context}")]
    ReferentialIntegrity {
        message: String,
        context: ErrorContext,
    },

    /// Any other storage-layer technical fault (disk, lock, corruption).
    #[error("Persistence error: {message} {context}")]
    Persistence {
        message: String,
        context: ErrorContext,
    },

    /// Backend selection or configuration errors.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl RepositoryError {
    pub fn not_found(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::NotFound {
            message: message.into(),
            context,
        }
    }

    pub fn duplicate(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Duplicate {
            message: message.into(),
            context,
        }
    }

    pub fn referential_integrity(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ReferentialIntegrity {
            message: message.into(),
            context,
        }
    }

    pub fn persistence(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Persistence {
            message: message.into(),
            context,
        }
    }
}
