//! Schema synthesis for the SQLite backend.
//!
//! DDL is generated from the entity registry: one table per entity kind,
//! `id INTEGER PRIMARY KEY AUTOINCREMENT` plus one column per schema entry,
//! with foreign keys derived from relationship columns.

use rusqlite::Connection;

use crate::models::{Column, EntityKind, FieldType};

/// SQLite column type + nullability for a semantic field type.
fn column_ddl(column: &Column) -> String {
    let sql_type = match column.field_type {
        FieldType::Text => "TEXT NOT NULL",
        FieldType::Integer => "INTEGER NOT NULL",
        FieldType::Float => "REAL NOT NULL",
        // Dates are stored as ISO-8601 text (YYYY-MM-DD).
        FieldType::Date => "TEXT NOT NULL",
        FieldType::OptionalInteger => "INTEGER",
    };
    format!("{} {}", column.name, sql_type)
}

/// Builds the idempotent `CREATE TABLE` statement for an entity kind.
pub fn create_table_sql(kind: EntityKind) -> String {
    let mut lines = vec!["id INTEGER PRIMARY KEY AUTOINCREMENT".to_string()];
    lines.extend(kind.columns().iter().map(column_ddl));
    for column in kind.columns() {
        if let Some(related) = column.related_kind() {
            lines.push(format!(
                "FOREIGN KEY ({}) REFERENCES {} (id)",
                column.name,
                related.table()
            ));
        }
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        kind.table(),
        lines.join(",\n    ")
    )
}

/// Creates every registry table that does not exist yet.
///
/// Registration order guarantees referenced tables are created before the
/// tables that point at them.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    for kind in EntityKind::ALL {
        conn.execute_batch(&create_table_sql(kind))?;
    }
    Ok(())
}
