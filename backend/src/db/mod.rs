//! Storage module: repository pattern over the entity registry.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing different backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Presentation boundary (forms, table views)             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service layer (services::GymService)                   │
//! │  - Cross-entity referential pre-checks                  │
//! │  - Date-range rule                                      │
//! │  - Schema lookup by entity name                         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository trait (repository) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │   SqliteRepository           │
//!     │   LocalRepository            │
//!     └──────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```ignore
//! use gympro::config::AppConfig;
//! use gympro::db;
//!
//! let config = AppConfig::load("gympro.toml");
//! db::init_repository(&config)?;
//! let repo = db::get_repository()?;
//! ```

// Feature flag priority: sqlite > local.
#[cfg(not(any(feature = "sqlite-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;

// Sqlite config is colocated with the repository implementation.
#[cfg(feature = "sqlite-repo")]
pub use repositories::sqlite::SqliteConfig;
#[cfg(not(feature = "sqlite-repo"))]
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    _private: (),
}

pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
pub use repositories::SqliteRepository;
pub use repository::{ErrorContext, Repository, RepositoryError, RepositoryResult};

use std::sync::{Arc, OnceLock};

use tracing::info;

use crate::config::AppConfig;

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn Repository>> = OnceLock::new();

/// Build the configured repository and install it as the process-wide
/// instance. Subsequent calls are no-ops.
pub fn init_repository(config: &AppConfig) -> RepositoryResult<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }
    let repo_type = RepositoryType::from_env(config.repository_type());
    #[cfg(feature = "sqlite-repo")]
    let sqlite_config = Some(config.sqlite_config());
    #[cfg(not(feature = "sqlite-repo"))]
    let sqlite_config: Option<SqliteConfig> = None;

    let repo = RepositoryFactory::create(repo_type, sqlite_config.as_ref())?;
    info!(?repo_type, "repository initialized");
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Access the process-wide repository.
pub fn get_repository() -> RepositoryResult<&'static Arc<dyn Repository>> {
    REPOSITORY.get().ok_or_else(|| {
        RepositoryError::Configuration("repository not initialized".to_string())
    })
}
