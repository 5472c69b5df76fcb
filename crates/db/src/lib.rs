//! Database layer for catalog-rs.

pub mod entities;
pub mod migrations;
pub mod repositories;

use catalog_common::{AppError, Config};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::log::LevelFilter;

/// Open the connection pool described by the database section of `config`.
pub async fn init(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = &config.database;

    let mut opts = ConnectOptions::new(&db.url);
    opts.max_connections(db.max_connections)
        .min_connections(db.min_connections)
        .connect_timeout(Duration::from_secs(db.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(db.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(db.idle_timeout_secs))
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opts)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Run pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), AppError> {
    use sea_orm_migration::MigratorTrait;
    migrations::Migrator::up(db, None)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}
