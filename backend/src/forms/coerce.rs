//! Type-directed coercion of raw form input.
//!
//! Form controls hand back strings; the schema says what each one means.
//! Every field is mandatory for submission: problems collect into
//! per-field markers that block the submit, they never surface to the
//! service as exceptions.
//!
//! Dates are entered in the display format `DD-MM-YYYY` and stored in the
//! ISO format `YYYY-MM-DD`.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{EntityKind, FieldType, Record, Value};

/// Display format for dates in form controls and table cells.
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";
/// Storage format for dates (ISO-8601 date).
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw field values collected from a form, keyed by attribute name.
#[derive(Debug, Clone, Default)]
pub struct RawForm {
    values: BTreeMap<String, String>,
}

impl RawForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Why a single field blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    /// Empty or missing value.
    Required,
    /// Not a date in `DD-MM-YYYY`.
    InvalidDate,
    /// Not a number.
    InvalidNumber,
}

impl FieldIssue {
    /// Marker text for the offending control.
    pub fn marker(self) -> &'static str {
        match self {
            FieldIssue::Required => "Requerido",
            FieldIssue::InvalidDate => "Fecha inválida",
            FieldIssue::InvalidNumber => "Número inválido",
        }
    }
}

/// Per-field issues that blocked a submission. Local and recoverable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub issues: Vec<(String, FieldIssue)>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_for(&self, name: &str) -> Option<FieldIssue> {
        self.issues
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, issue)| *issue)
    }

    fn push(&mut self, name: &str, issue: FieldIssue) {
        self.issues.push((name.to_string(), issue));
    }
}

/// Parse a date in the display format.
pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DISPLAY_DATE_FORMAT).ok()
}

/// Render a date in the display format.
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Render a date in the storage format.
pub fn storage_date(date: NaiveDate) -> String {
    date.format(STORAGE_DATE_FORMAT).to_string()
}

/// Coerce raw form values into a record of `kind`, identity unset.
///
/// Walks the schema columns in order; each raw string is converted
/// according to the column's semantic type. All fields are mandatory at
/// this layer even where the data model allows absence.
pub fn coerce(kind: EntityKind, form: &RawForm) -> Result<Record, FormErrors> {
    let mut errors = FormErrors::default();
    let mut values = Vec::with_capacity(kind.columns().len());

    for column in kind.columns() {
        let raw = form.get(column.name).unwrap_or("").trim();
        if raw.is_empty() {
            errors.push(column.name, FieldIssue::Required);
            continue;
        }
        match column.field_type {
            FieldType::Text => values.push(Value::Text(raw.to_string())),
            FieldType::Integer => match raw.parse::<i64>() {
                Ok(n) => values.push(Value::Integer(n)),
                Err(_) => errors.push(column.name, FieldIssue::InvalidNumber),
            },
            FieldType::OptionalInteger => match raw.parse::<i64>() {
                Ok(n) => values.push(Value::OptionalInteger(Some(n))),
                Err(_) => errors.push(column.name, FieldIssue::InvalidNumber),
            },
            FieldType::Float => match raw.parse::<f64>() {
                Ok(f) => values.push(Value::Float(f)),
                Err(_) => errors.push(column.name, FieldIssue::InvalidNumber),
            },
            FieldType::Date => match parse_display_date(raw) {
                Some(date) => values.push(Value::Date(date)),
                None => errors.push(column.name, FieldIssue::InvalidDate),
            },
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    // Shape is correct by construction: one value per schema column.
    Record::from_values(kind, None, &values).ok_or(errors)
}
