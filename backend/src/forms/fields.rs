//! Schema-driven input field synthesis.
//!
//! One input control per non-identity schema column, typed by the semantic
//! field type. Relationship columns (the `*_id` convention) become
//! selection controls whose options the UI fills from a `get_all` call on
//! the related kind.

use serde::Serialize;

use crate::models::{Column, EntityKind, FieldType};

/// The kind of input control a field needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    TextInput,
    NumericInput,
    /// Date-picker-backed read-only text control.
    DatePicker,
    /// Selection control populated from the related entity's rows.
    Select(EntityKind),
}

/// One synthesized form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: String,
    pub control: Control,
}

/// Human-facing label for a snake_case field name ("last_name" -> "Last Name").
pub fn display_label(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn control_for(column: &Column) -> Control {
    match column.field_type {
        FieldType::Text => Control::TextInput,
        FieldType::Float => Control::NumericInput,
        FieldType::Date => Control::DatePicker,
        FieldType::Integer | FieldType::OptionalInteger => match column.related_kind() {
            Some(related) => Control::Select(related),
            None => Control::NumericInput,
        },
    }
}

/// Synthesize the form fields for an entity kind, in schema order.
pub fn fields_for(kind: EntityKind) -> Vec<FieldSpec> {
    kind.columns()
        .iter()
        .map(|column| FieldSpec {
            name: column.name,
            label: display_label(column.name),
            control: control_for(column),
        })
        .collect()
}
