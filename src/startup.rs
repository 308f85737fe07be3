//! Database startup: pool creation and schema migration.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::Error};

/// Connect to the database and run migrations
///
/// The returned pool is the session factory for every repository: each statement
/// checks a connection out and hands it back when the statement completes or fails.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.max_connections)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Connected to database and applied migrations"
    );

    Ok(db)
}
