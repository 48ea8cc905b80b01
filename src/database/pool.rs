use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::config::DatabaseConfig;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("DATABASE_URL is not set")]
    UrlMissing,
    #[error("database connection failed: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connection pool sized from config; the URL comes straight from the
/// environment.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let url = std::env::var("DATABASE_URL").map_err(|_| DatabaseError::UrlMissing)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&url)
        .await?;

    Ok(pool)
}

/// Applies the schema migrations embedded from ./migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::migrate!().run(pool).await?;
    Ok(())
}
