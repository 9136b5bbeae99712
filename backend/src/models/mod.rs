//! Domain records and the entity registry.
//!
//! `entities` holds the plain records managed by the application and the
//! [`Record`] tagged union used for generic dispatch; `registry` holds the
//! schema side: the closed [`EntityKind`] set and the ordered column
//! descriptors that drive form generation, coercion and SQL synthesis.

pub mod entities;
pub mod registry;

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;

pub use entities::{Client, Instructor, Record, Routine};
pub use registry::{Column, EntityKind, FieldType, UnknownEntityError, Value};
