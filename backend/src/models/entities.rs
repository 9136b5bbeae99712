//! Entity records managed by the application.
//!
//! Identity is `Option<i64>`: `None` until the store assigns a real id on
//! insert. Field declaration order is the authoritative schema order; the
//! column tables in [`registry`](super::registry) must list fields in
//! exactly this order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::registry::{EntityKind, Value};

/// A training routine clients can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub id: Option<i64>,
    pub name: String,
    pub pdf_link: String,
}

/// A gym instructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: Option<i64>,
    pub name: String,
    pub last_name: String,
}

/// A gym client, optionally assigned to an instructor and a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Option<i64>,
    pub name: String,
    pub last_name: String,
    pub routine_start_date: NaiveDate,
    pub routine_end_date: NaiveDate,
    pub instructor_id: Option<i64>,
    pub routine_id: Option<i64>,
    pub routine_cycle: i64,
}

impl Client {
    /// A client is complete when it has a name and both assignments.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.last_name.is_empty()
            && self.instructor_id.is_some()
            && self.routine_id.is_some()
    }
}

/// Closed union over all entity records, used wherever the concrete entity
/// type is chosen at runtime (generic CRUD, form submission, table views).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Record {
    Routine(Routine),
    Instructor(Instructor),
    Client(Client),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Routine(_) => EntityKind::Routine,
            Record::Instructor(_) => EntityKind::Instructor,
            Record::Client(_) => EntityKind::Client,
        }
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            Record::Routine(r) => r.id,
            Record::Instructor(i) => i.id,
            Record::Client(c) => c.id,
        }
    }

    /// Returns the record with its identity replaced by `id`.
    pub fn with_id(mut self, id: i64) -> Self {
        match &mut self {
            Record::Routine(r) => r.id = Some(id),
            Record::Instructor(i) => i.id = Some(id),
            Record::Client(c) => c.id = Some(id),
        }
        self
    }

    /// Non-identity field values in schema order, aligned one-to-one with
    /// `self.kind().columns()`.
    pub fn values(&self) -> Vec<Value> {
        match self {
            Record::Routine(r) => vec![
                Value::Text(r.name.clone()),
                Value::Text(r.pdf_link.clone()),
            ],
            Record::Instructor(i) => vec![
                Value::Text(i.name.clone()),
                Value::Text(i.last_name.clone()),
            ],
            Record::Client(c) => vec![
                Value::Text(c.name.clone()),
                Value::Text(c.last_name.clone()),
                Value::Date(c.routine_start_date),
                Value::Date(c.routine_end_date),
                Value::OptionalInteger(c.instructor_id),
                Value::OptionalInteger(c.routine_id),
                Value::Integer(c.routine_cycle),
            ],
        }
    }

    /// Rebuilds a record from schema-ordered values, the inverse of
    /// [`Record::values`]. Returns `None` when the value shape does not
    /// match the schema of `kind`.
    pub fn from_values(kind: EntityKind, id: Option<i64>, values: &[Value]) -> Option<Record> {
        let mut it = values.iter();
        let record = match kind {
            EntityKind::Routine => Record::Routine(Routine {
                id,
                name: it.next()?.as_text()?.to_string(),
                pdf_link: it.next()?.as_text()?.to_string(),
            }),
            EntityKind::Instructor => Record::Instructor(Instructor {
                id,
                name: it.next()?.as_text()?.to_string(),
                last_name: it.next()?.as_text()?.to_string(),
            }),
            EntityKind::Client => Record::Client(Client {
                id,
                name: it.next()?.as_text()?.to_string(),
                last_name: it.next()?.as_text()?.to_string(),
                routine_start_date: it.next()?.as_date()?,
                routine_end_date: it.next()?.as_date()?,
                instructor_id: it.next()?.as_optional_integer()?,
                routine_id: it.next()?.as_optional_integer()?,
                routine_cycle: it.next()?.as_integer()?,
            }),
        };
        if it.next().is_some() {
            return None;
        }
        Some(record)
    }
}

impl From<Routine> for Record {
    fn from(routine: Routine) -> Self {
        Record::Routine(routine)
    }
}

impl From<Instructor> for Record {
    fn from(instructor: Instructor) -> Self {
        Record::Instructor(instructor)
    }
}

impl From<Client> for Record {
    fn from(client: Client) -> Self {
        Record::Client(client)
    }
}
