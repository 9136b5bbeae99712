//! Display-only view projections for table rendering.
//!
//! These rows reshape entities for the screen: foreign keys become
//! human-readable labels and date pairs collapse into one formatted range.
//! Never persisted.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Client, Instructor, Record, Routine};

use super::coerce::display_date;

/// Placeholder cell for the QR lookup control.
pub const QR_PLACEHOLDER: &str = "🔎";
/// Placeholder cell for the edit/delete controls.
pub const ACTIONS_PLACEHOLDER: &str = "🛠️ 🗑️";
/// Shown when a foreign key points nowhere the index knows about.
pub const MISSING_LABEL: &str = "-";

/// Table row for a routine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutineRow {
    pub id: Option<i64>,
    pub name: String,
    pub qr: &'static str,
    pub actions: &'static str,
}

/// Table row for an instructor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructorRow {
    pub full_name: String,
    pub actions: &'static str,
}

/// Table row for a client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRow {
    pub full_name: String,
    pub routine: String,
    pub cycle: String,
    pub dates: String,
    pub qr: &'static str,
    pub actions: &'static str,
}

/// Lookup index from foreign key to display label, built from `get_all`
/// results for the related kinds.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    instructors: HashMap<i64, String>,
    routines: HashMap<i64, String>,
}

impl LabelIndex {
    pub fn new(instructors: &[Record], routines: &[Record]) -> Self {
        let mut index = Self::default();
        for record in instructors {
            if let Record::Instructor(instructor) = record {
                if let Some(id) = instructor.id {
                    index
                        .instructors
                        .insert(id, format!("{} {}", instructor.name, instructor.last_name));
                }
            }
        }
        for record in routines {
            if let Record::Routine(routine) = record {
                if let Some(id) = routine.id {
                    index.routines.insert(id, routine.name.clone());
                }
            }
        }
        index
    }

    pub fn instructor_label(&self, id: Option<i64>) -> &str {
        id.and_then(|id| self.instructors.get(&id))
            .map(String::as_str)
            .unwrap_or(MISSING_LABEL)
    }

    pub fn routine_label(&self, id: Option<i64>) -> &str {
        id.and_then(|id| self.routines.get(&id))
            .map(String::as_str)
            .unwrap_or(MISSING_LABEL)
    }
}

pub fn routine_row(routine: &Routine) -> RoutineRow {
    RoutineRow {
        id: routine.id,
        name: routine.name.clone(),
        qr: QR_PLACEHOLDER,
        actions: ACTIONS_PLACEHOLDER,
    }
}

pub fn instructor_row(instructor: &Instructor) -> InstructorRow {
    InstructorRow {
        full_name: format!("{} {}", instructor.name, instructor.last_name),
        actions: ACTIONS_PLACEHOLDER,
    }
}

pub fn client_row(client: &Client, labels: &LabelIndex) -> ClientRow {
    ClientRow {
        full_name: format!("{} {}", client.name, client.last_name),
        routine: labels.routine_label(client.routine_id).to_string(),
        cycle: client.routine_cycle.to_string(),
        dates: format!(
            "{} - {}",
            display_date(client.routine_start_date),
            display_date(client.routine_end_date)
        ),
        qr: QR_PLACEHOLDER,
        actions: ACTIONS_PLACEHOLDER,
    }
}
