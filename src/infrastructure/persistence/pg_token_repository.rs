//! PostgreSQL implementation of the user and token repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Actor;
use crate::domain::repositories::{ApiToken, TokenRepository};
use crate::error::AppError;

#[derive(FromRow)]
struct ActorRow {
    login: String,
    is_superuser: bool,
    language: String,
}

impl From<ActorRow> for Actor {
    fn from(row: ActorRow) -> Self {
        Actor::new(row.login, row.is_superuser, row.language)
    }
}

#[derive(FromRow)]
struct TokenRow {
    id: i64,
    login: String,
    name: String,
    token_hash: String,
    created_at: DateTime<Utc>,
    revoked_at: Option<DateTime<Utc>>,
}

impl From<TokenRow> for ApiToken {
    fn from(row: TokenRow) -> Self {
        ApiToken {
            id: row.id,
            login: row.login,
            name: row.name,
            token_hash: row.token_hash,
            created_at: row.created_at,
            revoked_at: row.revoked_at,
        }
    }
}

/// PostgreSQL repository for users and their API tokens.
///
/// Stores hashed tokens (HMAC-SHA256). Raw tokens are never persisted.
pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn find_actor(&self, token_hash: &str) -> Result<Option<Actor>, AppError> {
        let row = sqlx::query_as::<_, ActorRow>(
            r#"
            SELECT u.login, u.is_superuser, u.language
            FROM api_tokens t
            JOIN users u ON u.login = t.login
            WHERE t.token_hash = $1
              AND t.revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Actor::from))
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE api_tokens
            SET last_used_at = NOW()
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn upsert_user(&self, actor: Actor) -> Result<Actor, AppError> {
        let row = sqlx::query_as::<_, ActorRow>(
            r#"
            INSERT INTO users (login, is_superuser, language)
            VALUES ($1, $2, $3)
            ON CONFLICT (login) DO UPDATE
            SET is_superuser = EXCLUDED.is_superuser,
                language = EXCLUDED.language
            RETURNING login, is_superuser, language
            "#,
        )
        .bind(&actor.login)
        .bind(actor.is_superuser)
        .bind(&actor.language)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn create_token(
        &self,
        login: &str,
        name: &str,
        token_hash: &str,
    ) -> Result<ApiToken, AppError> {
        let user_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE login = $1)")
                .bind(login)
                .fetch_one(self.pool.as_ref())
                .await?;

        if !user_exists {
            return Err(AppError::not_found("User not found", json!({ "login": login })));
        }

        let row = sqlx::query_as::<_, TokenRow>(
            r#"
            INSERT INTO api_tokens (login, name, token_hash)
            VALUES ($1, $2, $3)
            RETURNING id, login, name, token_hash, created_at, revoked_at
            "#,
        )
        .bind(login)
        .bind(name)
        .bind(token_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        let rows = sqlx::query_as::<_, TokenRow>(
            r#"
            SELECT id, login, name, token_hash, created_at, revoked_at
            FROM api_tokens
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ApiToken::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ApiToken>, AppError> {
        let row = sqlx::query_as::<_, TokenRow>(
            r#"
            SELECT id, login, name, token_hash, created_at, revoked_at
            FROM api_tokens
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ApiToken::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError> {
        let row = sqlx::query_as::<_, TokenRow>(
            r#"
            SELECT id, login, name, token_hash, created_at, revoked_at
            FROM api_tokens
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ApiToken::from))
    }

    async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE api_tokens
            SET revoked_at = NOW()
            WHERE id = $1 AND revoked_at IS NULL
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
