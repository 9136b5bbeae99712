//! Gympro application launcher.
//!
//! Loads the settings file, initializes the repository backend and reports
//! per-table row counts before handing control to the UI shell.
//!
//! # Usage
//!
//! ```bash
//! # Run against the configured SQLite database (default)
//! cargo run --bin gympro
//!
//! # Run with the in-memory repository
//! REPOSITORY_TYPE=local cargo run --bin gympro
//! ```
//!
//! # Environment Variables
//!
//! - `GYMPRO_CONFIG`: path to the settings file (default: gympro.toml)
//! - `REPOSITORY_TYPE`: backend override ("sqlite", "local")
//! - `RUST_LOG`: log level (default: info)

use std::env;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gympro::config::AppConfig;
use gympro::db;
use gympro::models::EntityKind;
use gympro::services::GymService;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config_path = env::var("GYMPRO_CONFIG").unwrap_or_else(|_| "gympro.toml".to_string());
    let config = AppConfig::load(&config_path);
    info!(
        app = %config.app.name,
        version = %config.app.version,
        theme = %config.app.theme,
        "starting"
    );

    db::init_repository(&config)?;
    let repository = Arc::clone(db::get_repository()?);
    repository.health_check()?;
    info!("repository initialized successfully");

    let service = GymService::new(repository);
    for kind in EntityKind::ALL {
        let rows = service.get_all(kind)?;
        info!(entity = kind.table(), rows = rows.len(), "table ready");
    }

    Ok(())
}
