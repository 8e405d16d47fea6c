//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};

use super::repos::DbError;
use super::schema;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Connect, verify the connection with a ping, and ensure the schema exists.
///
/// Safe to call on every startup.
///
/// # Example
///
/// ```ignore
/// let pool = initialize("postgres://localhost/birthdays", 5).await?;
/// ```
pub async fn initialize(database_url: &str, max_connections: u32) -> Result<PgPool, DbError> {
    let pool = create_pool_with_options(database_url, max_connections).await?;
    ping(&pool).await?;
    schema::ensure(&pool).await?;
    Ok(pool)
}

/// Cheap connectivity check with no side effects.
pub async fn ping(pool: &PgPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    Ok(())
}
