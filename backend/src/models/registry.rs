//! Entity registry and schema introspection.
//!
//! The registry is a compile-time-known closed set: every entity kind
//! carries a static ordered column table (identity field excluded) used
//! verbatim for form layout, table column order and generated SQL. Lookup
//! by canonical name is the only fallible entry point.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A name was used for schema lookup or dispatch that is not part of the
/// entity registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity: {0}")]
pub struct UnknownEntityError(pub String);

/// Semantic field types. Coercion and widget selection dispatch on this
/// enum exhaustively; adding a variant is a compile error at every match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Date,
    OptionalInteger,
}

/// One non-identity column of an entity: name plus semantic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub field_type: FieldType,
}

impl Column {
    const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self { name, field_type }
    }

    /// Relationship columns follow the `*_id` naming convention.
    pub fn is_relation(&self) -> bool {
        self.name.ends_with("_id")
    }

    /// The entity kind a relationship column points at, derived from the
    /// column name prefix (`instructor_id` -> `Instructor`).
    pub fn related_kind(&self) -> Option<EntityKind> {
        let target = self.name.strip_suffix("_id")?;
        EntityKind::from_name(target).ok()
    }
}

const ROUTINE_COLUMNS: &[Column] = &[
    Column::new("name", FieldType::Text),
    Column::new("pdf_link", FieldType::Text),
];

const INSTRUCTOR_COLUMNS: &[Column] = &[
    Column::new("name", FieldType::Text),
    Column::new("last_name", FieldType::Text),
];

const CLIENT_COLUMNS: &[Column] = &[
    Column::new("name", FieldType::Text),
    Column::new("last_name", FieldType::Text),
    Column::new("routine_start_date", FieldType::Date),
    Column::new("routine_end_date", FieldType::Date),
    Column::new("instructor_id", FieldType::OptionalInteger),
    Column::new("routine_id", FieldType::OptionalInteger),
    Column::new("routine_cycle", FieldType::Integer),
];

/// The closed set of entity kinds managed by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Routine,
    Instructor,
    Client,
}

impl EntityKind {
    /// Every registered kind, in registration order.
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Routine,
        EntityKind::Instructor,
        EntityKind::Client,
    ];

    /// Storage table name (lower-cased entity name).
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Routine => "routine",
            EntityKind::Instructor => "instructor",
            EntityKind::Client => "client",
        }
    }

    /// Resolves a canonical entity name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, UnknownEntityError> {
        match name.to_ascii_lowercase().as_str() {
            "routine" => Ok(EntityKind::Routine),
            "instructor" => Ok(EntityKind::Instructor),
            "client" => Ok(EntityKind::Client),
            _ => Err(UnknownEntityError(name.to_string())),
        }
    }

    /// Ordered column descriptors, identity field excluded. The order is
    /// the entity's declared field order and is used verbatim for form
    /// layout and table columns.
    pub fn columns(self) -> &'static [Column] {
        match self {
            EntityKind::Routine => ROUTINE_COLUMNS,
            EntityKind::Instructor => INSTRUCTOR_COLUMNS,
            EntityKind::Client => CLIENT_COLUMNS,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// A typed field value, the runtime counterpart of [`FieldType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    OptionalInteger(Option<i64>),
}

impl Value {
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Text(_) => FieldType::Text,
            Value::Integer(_) => FieldType::Integer,
            Value::Float(_) => FieldType::Float,
            Value::Date(_) => FieldType::Date,
            Value::OptionalInteger(_) => FieldType::OptionalInteger,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_optional_integer(&self) -> Option<Option<i64>> {
        match self {
            Value::OptionalInteger(o) => Some(*o),
            _ => None,
        }
    }
}
