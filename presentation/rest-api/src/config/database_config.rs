use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::{env, time::Duration};

use super::env_or;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string. Without it the service keeps
///   its data in memory.
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: wait limit for a pooled connection (default: 30)
/// - DATABASE_MIGRATIONS_PATH: when set, migrations in that directory run at startup
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database() -> anyhow::Result<Option<PgPool>> {
    let Ok(db_url) = env::var("DATABASE_URL") else {
        tracing::warn!("DATABASE_URL not set, using the in-memory store");
        return Ok(None);
    };

    let mut config = DatabaseConfig::new(db_url);
    config.max_connections = env_or("DATABASE_MAX_CONNECTIONS", config.max_connections);
    config.acquire_timeout = Duration::from_secs(env_or(
        "DATABASE_ACQUIRE_TIMEOUT_SECS",
        config.acquire_timeout.as_secs(),
    ));

    let pool = create_postgres_pool(&config).await?;

    if let Ok(path) = env::var("DATABASE_MIGRATIONS_PATH") {
        run_migrations(&pool, &path).await?;
        tracing::info!(path = %path, "Database migrations applied");
    }

    Ok(Some(pool))
}
