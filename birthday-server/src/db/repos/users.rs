//! User repository
//!
//! - upsert: INSERT with ON CONFLICT (last write wins)
//! - lookup: point read by primary key

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::{Birthdate, Username};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Storage for user birthdates.
///
/// Implementations must be safe to share across concurrent requests; two
/// upserts for the same username resolve inside the store, not in callers.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Insert the user or overwrite their birthdate.
    async fn upsert(&self, username: &Username, birthdate: Birthdate) -> Result<(), DbError>;

    /// Stored birthdate for an exact username match, or [`DbError::NotFound`].
    async fn lookup(&self, username: &str) -> Result<NaiveDate, DbError>;

    /// Connectivity check with no side effects.
    async fn ping(&self) -> Result<(), DbError>;
}

/// PostgreSQL-backed user store
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn upsert(&self, username: &Username, birthdate: Birthdate) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO users (username, birthdate) VALUES ($1, $2)
            ON CONFLICT (username) DO UPDATE SET birthdate = EXCLUDED.birthdate
            "#,
        )
        .bind(username.as_str())
        .bind(birthdate.date())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn lookup(&self, username: &str) -> Result<NaiveDate, DbError> {
        sqlx::query_scalar::<_, NaiveDate>("SELECT birthdate FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "user",
                id: username.to_owned(),
            })
    }

    async fn ping(&self) -> Result<(), DbError> {
        crate::db::pool::ping(&self.pool).await
    }
}
