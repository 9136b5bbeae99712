//! In-memory local repository implementation.
//!
//! Stores records in per-entity `BTreeMap`s behind an `RwLock`, giving
//! fast, deterministic and isolated execution for unit tests and local
//! development. The contract matches the SQLite backend, including the
//! referential checks the storage engine would otherwise enforce.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::db::repository::{
    ErrorContext, Repository, RepositoryError, RepositoryResult,
};
use crate::models::{EntityKind, Record};

#[derive(Debug, Default)]
struct LocalTable {
    rows: BTreeMap<i64, Record>,
    next_id: i64,
}

impl LocalTable {
    fn assign_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Default)]
struct LocalData {
    routines: LocalTable,
    instructors: LocalTable,
    clients: LocalTable,
}

impl LocalData {
    fn table(&self, kind: EntityKind) -> &LocalTable {
        match kind {
            EntityKind::Routine => &self.routines,
            EntityKind::Instructor => &self.instructors,
            EntityKind::Client => &self.clients,
        }
    }

    fn table_mut(&mut self, kind: EntityKind) -> &mut LocalTable {
        match kind {
            EntityKind::Routine => &mut self.routines,
            EntityKind::Instructor => &mut self.instructors,
            EntityKind::Client => &mut self.clients,
        }
    }

    /// Engine-level referential check on insert/update: every set foreign
    /// key of a client must point at an existing row.
    fn check_references(&self, record: &Record, context: &ErrorContext) -> RepositoryResult<()> {
        if let Record::Client(client) = record {
            let references = [
                (EntityKind::Instructor, client.instructor_id),
                (EntityKind::Routine, client.routine_id),
            ];
            for (kind, reference) in references {
                if let Some(id) = reference {
                    if !self.table(kind).rows.contains_key(&id) {
                        return Err(RepositoryError::referential_integrity(
                            format!("no {} with id {}", kind.table(), id),
                            context.clone(),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Engine-level referential check on delete: a routine or instructor
    /// referenced by a client cannot be removed.
    fn check_dependents(
        &self,
        kind: EntityKind,
        id: i64,
        context: &ErrorContext,
    ) -> RepositoryResult<()> {
        let referenced = self.clients.rows.values().any(|record| match record {
            Record::Client(client) => match kind {
                EntityKind::Instructor => client.instructor_id == Some(id),
                EntityKind::Routine => client.routine_id == Some(id),
                EntityKind::Client => false,
            },
            _ => false,
        });
        if referenced {
            return Err(RepositoryError::referential_integrity(
                format!("{} {} is referenced by a client", kind.table(), id),
                context.clone(),
            ));
        }
        Ok(())
    }
}

/// In-memory local repository.
#[derive(Debug, Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, LocalData> {
        self.data.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, LocalData> {
        self.data.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Repository for LocalRepository {
    fn add(&self, record: &Record) -> RepositoryResult<Record> {
        let kind = record.kind();
        let context = ErrorContext::new("add").with_entity(kind.table());
        let mut data = self.write();
        data.check_references(record, &context)?;
        let id = data.table_mut(kind).assign_id();
        let stored = record.clone().with_id(id);
        data.table_mut(kind).rows.insert(id, stored.clone());
        Ok(stored)
    }

    fn get_by_id(&self, kind: EntityKind, id: i64) -> RepositoryResult<Record> {
        let context = ErrorContext::new("get_by_id")
            .with_entity(kind.table())
            .with_entity_id(id);
        self.read()
            .table(kind)
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found(
                    format!("no {} with id {}", kind.table(), id),
                    context,
                )
            })
    }

    fn get_all(&self, kind: EntityKind) -> RepositoryResult<Vec<Record>> {
        Ok(self.read().table(kind).rows.values().cloned().collect())
    }

    fn update(&self, record: &Record) -> RepositoryResult<()> {
        let kind = record.kind();
        let context = ErrorContext::new("update").with_entity(kind.table());
        let id = record.id().ok_or_else(|| {
            RepositoryError::not_found("record has no identity", context.clone())
        })?;
        let context = context.with_entity_id(id);

        let mut data = self.write();
        if !data.table(kind).rows.contains_key(&id) {
            return Err(RepositoryError::not_found(
                format!("no {} with id {}", kind.table(), id),
                context,
            ));
        }
        data.check_references(record, &context)?;
        data.table_mut(kind).rows.insert(id, record.clone());
        Ok(())
    }

    fn delete(&self, record: &Record) -> RepositoryResult<()> {
        let kind = record.kind();
        let context = ErrorContext::new("delete").with_entity(kind.table());
        let id = record.id().ok_or_else(|| {
            RepositoryError::not_found("record has no identity", context.clone())
        })?;
        let context = context.with_entity_id(id);

        let mut data = self.write();
        if !data.table(kind).rows.contains_key(&id) {
            return Err(RepositoryError::not_found(
                format!("no {} with id {}", kind.table(), id),
                context,
            ));
        }
        data.check_dependents(kind, id, &context)?;
        data.table_mut(kind).rows.remove(&id);
        Ok(())
    }

    fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
