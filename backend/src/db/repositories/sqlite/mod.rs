//! Embedded SQLite repository implementation.
//!
//! One physical table per entity kind, SQL text synthesized from the entity
//! registry. Every call opens its own connection, enables foreign-key
//! enforcement and closes the connection when done; single statements run
//! in autocommit mode, so each call is atomic.

mod schema;

pub use schema::create_table_sql;

use std::path::PathBuf;
use std::time::Duration;

use rusqlite::types::ToSqlOutput;
use rusqlite::{Connection, ErrorCode, Row, ToSql};
use serde::Deserialize;
use tracing::debug;

use crate::db::repository::{
    ErrorContext, Repository, RepositoryError, RepositoryResult,
};
use crate::models::{Client, EntityKind, Instructor, Record, Routine, Value};

/// Default busy timeout (ms).
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Configuration for the SQLite repository.
#[derive(Debug, Clone, Deserialize)]
pub struct SqliteConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

const fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

impl SqliteConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

/// SQLite-backed repository.
///
/// Holds only configuration; connections are scoped to individual calls.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    config: SqliteConfig,
}

impl SqliteRepository {
    /// Open (creating if needed) the database file and ensure the schema
    /// exists.
    pub fn new(config: SqliteConfig) -> RepositoryResult<Self> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RepositoryError::persistence(
                        format!("cannot create database directory: {}", e),
                        ErrorContext::new("init"),
                    )
                })?;
            }
        }
        let repo = Self { config };
        let conn = repo.connect(ErrorContext::new("init"))?;
        schema::init_schema(&conn)
            .map_err(|e| map_driver_error(e, ErrorContext::new("init")))?;
        debug!(path = %repo.config.path.display(), "sqlite schema ready");
        Ok(repo)
    }

    /// Open a connection scoped to a single repository call.
    fn connect(&self, context: ErrorContext) -> RepositoryResult<Connection> {
        let conn = Connection::open(&self.config.path)
            .map_err(|e| map_driver_error(e, context.clone()))?;
        conn.busy_timeout(Duration::from_millis(self.config.busy_timeout_ms))
            .map_err(|e| map_driver_error(e, context.clone()))?;
        conn.pragma_update(None, "foreign_keys", true)
            .map_err(|e| map_driver_error(e, context))?;
        Ok(conn)
    }
}

impl Repository for SqliteRepository {
    fn add(&self, record: &Record) -> RepositoryResult<Record> {
        let kind = record.kind();
        let context = ErrorContext::new("add").with_entity(kind.table());
        let columns = kind.columns();
        let column_list: Vec<&str> = columns.iter().map(|c| c.name).collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            kind.table(),
            column_list.join(", "),
            placeholders.join(", ")
        );

        let conn = self.connect(context.clone())?;
        let values = record.values();
        conn.execute(&sql, rusqlite::params_from_iter(values.iter()))
            .map_err(|e| map_driver_error(e, context))?;
        let id = conn.last_insert_rowid();
        debug!(entity = kind.table(), id, "record added");
        Ok(record.clone().with_id(id))
    }

    fn get_by_id(&self, kind: EntityKind, id: i64) -> RepositoryResult<Record> {
        let context = ErrorContext::new("get_by_id")
            .with_entity(kind.table())
            .with_entity_id(id);
        let sql = format!("{} WHERE id = ?1", select_sql(kind));

        let conn = self.connect(context.clone())?;
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| map_driver_error(e, context.clone()))?;
        let record = stmt
            .query_row([id], |row| decode_row(kind, row))
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => RepositoryError::not_found(
                    format!("no {} with id {}", kind.table(), id),
                    context.clone(),
                ),
                other => map_driver_error(other, context.clone()),
            })?;
        Ok(record)
    }

    fn get_all(&self, kind: EntityKind) -> RepositoryResult<Vec<Record>> {
        let context = ErrorContext::new("get_all").with_entity(kind.table());
        let conn = self.connect(context.clone())?;
        let mut stmt = conn
            .prepare(&select_sql(kind))
            .map_err(|e| map_driver_error(e, context.clone()))?;
        let rows = stmt
            .query_map([], |row| decode_row(kind, row))
            .map_err(|e| map_driver_error(e, context.clone()))?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| map_driver_error(e, context.clone()))?);
        }
        Ok(records)
    }

    fn update(&self, record: &Record) -> RepositoryResult<()> {
        let kind = record.kind();
        let context = ErrorContext::new("update").with_entity(kind.table());
        let id = record.id().ok_or_else(|| {
            RepositoryError::not_found("record has no identity", context.clone())
        })?;
        let context = context.with_entity_id(id);

        let columns = kind.columns();
        let assignments: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} = ?{}", c.name, i + 1))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            kind.table(),
            assignments.join(", "),
            columns.len() + 1
        );

        let mut values = record.values();
        values.push(Value::Integer(id));

        let conn = self.connect(context.clone())?;
        let changed = conn
            .execute(&sql, rusqlite::params_from_iter(values.iter()))
            .map_err(|e| map_driver_error(e, context.clone()))?;
        if changed == 0 {
            return Err(RepositoryError::not_found(
                format!("no {} with id {}", kind.table(), id),
                context,
            ));
        }
        debug!(entity = kind.table(), id, "record updated");
        Ok(())
    }

    fn delete(&self, record: &Record) -> RepositoryResult<()> {
        let kind = record.kind();
        let context = ErrorContext::new("delete").with_entity(kind.table());
        let id = record.id().ok_or_else(|| {
            RepositoryError::not_found("record has no identity", context.clone())
        })?;
        let context = context.with_entity_id(id);

        let sql = format!("DELETE FROM {} WHERE id = ?1", kind.table());
        let conn = self.connect(context.clone())?;
        let changed = conn
            .execute(&sql, [id])
            .map_err(|e| map_driver_error(e, context.clone()))?;
        if changed == 0 {
            return Err(RepositoryError::not_found(
                format!("no {} with id {}", kind.table(), id),
                context,
            ));
        }
        debug!(entity = kind.table(), id, "record deleted");
        Ok(())
    }

    fn health_check(&self) -> RepositoryResult<bool> {
        let context = ErrorContext::new("health_check");
        let conn = self.connect(context.clone())?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(|e| map_driver_error(e, context))?;
        Ok(true)
    }
}

/// `SELECT` prefix for an entity kind: identity first, then the schema
/// columns in declared order.
fn select_sql(kind: EntityKind) -> String {
    let column_list: Vec<&str> = kind.columns().iter().map(|c| c.name).collect();
    format!(
        "SELECT id, {} FROM {}",
        column_list.join(", "),
        kind.table()
    )
}

/// Decodes a row into a record; column indexes follow [`select_sql`].
fn decode_row(kind: EntityKind, row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(match kind {
        EntityKind::Routine => Record::Routine(Routine {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            pdf_link: row.get(2)?,
        }),
        EntityKind::Instructor => Record::Instructor(Instructor {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            last_name: row.get(2)?,
        }),
        EntityKind::Client => Record::Client(Client {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            last_name: row.get(2)?,
            routine_start_date: row.get(3)?,
            routine_end_date: row.get(4)?,
            instructor_id: row.get(5)?,
            routine_id: row.get(6)?,
            routine_cycle: row.get(7)?,
        }),
    })
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Value::Text(s) => s.to_sql(),
            Value::Integer(i) => i.to_sql(),
            Value::Float(f) => f.to_sql(),
            // chrono's NaiveDate binds as ISO-8601 text (YYYY-MM-DD).
            Value::Date(d) => d.to_sql(),
            Value::OptionalInteger(o) => o.to_sql(),
        }
    }
}

/// Maps a driver error to the repository taxonomy. The native error type
/// never crosses this boundary.
fn map_driver_error(err: rusqlite::Error, context: ErrorContext) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(code, message)
            if code.code == ErrorCode::ConstraintViolation =>
        {
            let detail = message.unwrap_or_else(|| "constraint violation".to_string());
            match code.extended_code {
                rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
                | rusqlite::ffi::SQLITE_CONSTRAINT_TRIGGER => {
                    RepositoryError::referential_integrity(detail, context)
                }
                rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    RepositoryError::duplicate(detail, context)
                }
                _ => RepositoryError::persistence(detail, context),
            }
        }
        other => RepositoryError::persistence(other.to_string(), context),
    }
}
