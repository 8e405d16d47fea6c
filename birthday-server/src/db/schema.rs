//! Table creation for the users table

use sqlx::PgPool;

/// Non-destructive; a no-op when the table already exists.
const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        username   TEXT PRIMARY KEY,
        birthdate  DATE NOT NULL
    )
"#;

/// Ensure the users table exists.
pub async fn ensure(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::debug!("Ensuring users table exists");
    sqlx::query(CREATE_USERS).execute(pool).await?;
    tracing::info!("Schema ready");
    Ok(())
}
