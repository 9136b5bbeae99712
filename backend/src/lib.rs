//! # Gympro Backend
//!
//! Persistence and business-logic core for a small gym management desktop
//! application: routines, instructors and the clients that tie them
//! together, stored in a local SQLite database.
//!
//! The centerpiece is the entity registry: a closed set of entity
//! descriptors (ordered field names plus semantic types) that drives
//! generic single-table CRUD, schema-derived form fields and type-directed
//! value coercion, so no layer hard-codes per-entity column lists where
//! the schema already answers the question.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: entity records, the entity registry and schema introspection
//! - [`db`]: repository trait, error taxonomy, storage backends and factory
//! - [`services`]: business rules and the uniform CRUD entry point
//! - [`forms`]: schema-driven field synthesis, value coercion and view rows
//! - [`config`]: TOML application settings with defaults
//!
//! ## Concurrency
//!
//! Single-user, single-process by design. Repository calls are synchronous
//! and each acquires a storage connection scoped to that one call; the only
//! process-wide state is the immutable entity registry and the optional
//! global repository handle.

pub mod config;

pub mod db;
pub mod models;

pub mod services;

pub mod forms;
