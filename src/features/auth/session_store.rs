//! Server-side session storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;
use sqlx::{FromRow, PgPool};
use std::time::Duration;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::shared::constants::SESSION_TOKEN_LENGTH;

/// A server-side session bound to one administrator
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Generate a cryptographically secure, opaque session token.
pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Compute the expiry instant for a session created at `now`.
pub fn expiry_from(now: DateTime<Utc>, ttl: Duration) -> Result<DateTime<Utc>> {
    let ttl = chrono::Duration::from_std(ttl)
        .map_err(|e| AppError::Internal(format!("Invalid session TTL: {}", e)))?;
    now.checked_add_signed(ttl)
        .ok_or_else(|| AppError::Internal("Session TTL overflows the calendar".to_string()))
}

/// Mapping from opaque token to user id and expiry
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Open a new session for `user_id` that lives for `ttl`.
    async fn create(&self, user_id: Uuid, ttl: Duration) -> Result<Session>;

    /// Resolve a token. Expired sessions are removed and reported as absent.
    async fn find_valid(&self, token: &str) -> Result<Option<Session>>;

    /// Remove a session. Deleting an unknown token is not an error.
    async fn delete(&self, token: &str) -> Result<()>;

    /// Remove every expired session, returning how many were deleted.
    async fn purge_expired(&self) -> Result<u64>;
}

/// Postgres-backed session store (`sessions` table)
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn create(&self, user_id: Uuid, ttl: Duration) -> Result<Session> {
        let now = Utc::now();
        let expires_at = expiry_from(now, ttl)?;

        sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (token, user_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING token, user_id, created_at, expires_at
            "#,
        )
        .bind(generate_token())
        .bind(user_id)
        .bind(now)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create session: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_valid(&self, token: &str) -> Result<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT token, user_id, created_at, expires_at
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        match session {
            Some(session) if session.is_expired_at(Utc::now()) => {
                self.delete(token).await?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn delete(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete session: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected())
    }
}
