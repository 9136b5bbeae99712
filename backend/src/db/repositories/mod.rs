//! Repository implementations module.
//!
//! This module contains different implementations of the `Repository` trait:
//! - `sqlite`: embedded SQLite implementation (the production store)
//! - `local`: in-memory implementation for unit testing and local development
pub mod local;
#[cfg(feature = "sqlite-repo")]
pub mod sqlite;

pub use local::LocalRepository;
#[cfg(feature = "sqlite-repo")]
pub use sqlite::{SqliteConfig, SqliteRepository};
