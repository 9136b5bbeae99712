//! The gym domain service.

use std::sync::Arc;

use tracing::debug;

use crate::db::Repository;
use crate::models::{Column, EntityKind, Record};

use super::error::{ServiceError, ServiceResult};

/// Uniform CRUD entry point with business-rule enforcement.
///
/// Holds a repository handle and validates cross-entity invariants before
/// delegating. Repository errors propagate unchanged; the service only
/// raises its own errors for the checks it performs itself.
pub struct GymService {
    repo: Arc<dyn Repository>,
}

impl GymService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    /// Validate and insert a record.
    ///
    /// For a client, referenced instructor and routine must exist (checked
    /// via repository lookups whose `NotFound` propagates unchanged, before
    /// anything is written) and the routine date range must be
    /// chronologically valid.
    pub fn add(&self, record: &Record) -> ServiceResult<Record> {
        self.validate_client_rules(record)?;
        debug!(entity = record.kind().table(), "adding record");
        Ok(self.repo.add(record)?)
    }

    pub fn get_by_id(&self, kind: EntityKind, id: i64) -> ServiceResult<Record> {
        Ok(self.repo.get_by_id(kind, id)?)
    }

    pub fn get_all(&self, kind: EntityKind) -> ServiceResult<Vec<Record>> {
        Ok(self.repo.get_all(kind)?)
    }

    /// Validate and update an existing record.
    ///
    /// Runs the same client validations as [`GymService::add`]: an edit can
    /// change foreign keys and dates just as a create can.
    pub fn update(&self, record: &Record) -> ServiceResult<()> {
        self.validate_client_rules(record)?;
        debug!(entity = record.kind().table(), id = ?record.id(), "updating record");
        Ok(self.repo.update(record)?)
    }

    /// Delete a record. Referential blocking is owned by the storage
    /// engine and surfaces as `ReferentialIntegrity`.
    pub fn delete(&self, record: &Record) -> ServiceResult<()> {
        debug!(entity = record.kind().table(), id = ?record.id(), "deleting record");
        Ok(self.repo.delete(record)?)
    }

    /// Ordered schema columns for a canonical entity name, identity field
    /// excluded.
    pub fn columns_for(&self, name: &str) -> ServiceResult<&'static [Column]> {
        Ok(EntityKind::from_name(name)?.columns())
    }

    fn validate_client_rules(&self, record: &Record) -> ServiceResult<()> {
        if let Record::Client(client) = record {
            // Fail fast on dangling references before any row is written.
            if let Some(id) = client.instructor_id {
                self.repo.get_by_id(EntityKind::Instructor, id)?;
            }
            if let Some(id) = client.routine_id {
                self.repo.get_by_id(EntityKind::Routine, id)?;
            }
            if client.routine_end_date < client.routine_start_date {
                return Err(ServiceError::BusinessRule(format!(
                    "routine end date {} precedes start date {}",
                    client.routine_end_date, client.routine_start_date
                )));
            }
        }
        Ok(())
    }
}
