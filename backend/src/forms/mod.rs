//! Presentation-boundary helpers: pure functions of (data, schema).
//!
//! Nothing here touches a widget toolkit. The UI layer consumes
//! [`fields::fields_for`] to lay out input controls, feeds raw string
//! values back through [`coerce::coerce`] on submit, and renders tables
//! from the display-only rows in [`view`].

pub mod coerce;
pub mod fields;
pub mod view;

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;

pub use coerce::{coerce, display_date, parse_display_date, FieldIssue, FormErrors, RawForm};
pub use fields::{fields_for, Control, FieldSpec};
pub use view::{
    client_row, instructor_row, routine_row, ClientRow, InstructorRow, LabelIndex, RoutineRow,
};
