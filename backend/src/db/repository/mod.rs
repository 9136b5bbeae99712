//! Repository trait for abstracting storage operations.
//!
//! This trait defines the generic single-table CRUD interface for all
//! registered entity kinds, allowing different backends (embedded SQLite,
//! in-memory) to be swapped via dependency injection.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::{EntityKind, Record};

/// Generic CRUD over the registered entity kinds.
///
/// Table names derive from the entity kind, column names from its schema;
/// implementations never hard-code per-entity column lists.
///
/// # Atomicity
/// Every call is atomic: the backing connection is scoped to the single
/// call and either fully applies the operation or rolls it back. There is
/// no pooling and no cross-call transaction.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so the repository handle can be
/// shared behind an `Arc`.
pub trait Repository: Send + Sync + std::fmt::Debug {
    /// Insert a record, letting the store assign its identity.
    ///
    /// The identity field is stripped from the payload; the returned record
    /// carries the store-assigned id.
    ///
    /// # Errors
    /// * `Duplicate` on a uniqueness-constraint violation
    /// * `ReferentialIntegrity` when the engine rejects a dangling reference
    /// * `Persistence` on any other storage fault
    fn add(&self, record: &Record) -> RepositoryResult<Record>;

    /// Fetch the single record of `kind` with identity `id`.
    ///
    /// # Errors
    /// * `NotFound` when no row matches (validation chains rely on this;
    ///   list displays use [`Repository::get_all`] instead)
    fn get_by_id(&self, kind: EntityKind, id: i64) -> RepositoryResult<Record>;

    /// Fetch all records of `kind`, in storage order.
    ///
    /// An empty collection is a valid result, not an error.
    fn get_all(&self, kind: EntityKind) -> RepositoryResult<Vec<Record>>;

    /// Update all non-identity fields of an existing record by name.
    ///
    /// # Errors
    /// * `NotFound` when the record has no identity or zero rows matched
    fn update(&self, record: &Record) -> RepositoryResult<()>;

    /// Physically delete an existing record.
    ///
    /// # Errors
    /// * `NotFound` when the record has no identity or zero rows matched
    /// * `ReferentialIntegrity` when a dependent row blocks the deletion
    fn delete(&self, record: &Record) -> RepositoryResult<()>;

    /// Check that the backing store is reachable and consistent.
    fn health_check(&self) -> RepositoryResult<bool>;
}
