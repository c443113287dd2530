//! Connection pool construction and schema migration.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StoreError;

/// Embedded, versioned schema migrations.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Open a SQLite pool for `database_url` and bring the schema up to date.
///
/// The database file is created if missing, and foreign-key enforcement is
/// switched on for every pooled connection; SQLite requires this
/// per-connection, and cascade deletes depend on it.
///
/// # Errors
/// Returns [`StoreError::Database`] if the URL is malformed or the pool
/// cannot connect, and [`StoreError::Migration`] if a migration fails.
pub async fn connect(database_url: &str) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    tracing::info!(url = %database_url, "store connected");
    Ok(pool)
}

/// Apply any pending migrations to an existing pool.
///
/// # Errors
/// Returns [`StoreError::Migration`] if a migration fails to apply.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StoreError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
