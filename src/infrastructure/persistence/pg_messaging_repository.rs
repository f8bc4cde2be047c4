//! PostgreSQL implementation of the mobile messaging repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{PhoneNumber, SmsCredentials};
use crate::domain::repositories::MessagingRepository;
use crate::error::AppError;

/// The settings table holds a single row with this key.
const SETTINGS_ROW_ID: i32 = 1;

#[derive(FromRow)]
struct CredentialsRow {
    sms_provider: Option<String>,
    sms_api_key: Option<String>,
}

#[derive(FromRow)]
struct PhoneNumberRow {
    number: String,
    validated: bool,
}

impl From<PhoneNumberRow> for PhoneNumber {
    fn from(row: PhoneNumberRow) -> Self {
        PhoneNumber::new(row.number, row.validated)
    }
}

/// PostgreSQL repository for SMS account settings and phone numbers.
///
/// A missing settings row reads as "not delegated, no credentials".
pub struct PgMessagingRepository {
    pool: Arc<PgPool>,
}

impl PgMessagingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessagingRepository for PgMessagingRepository {
    async fn delegated_management(&self) -> Result<bool, AppError> {
        let delegated: Option<bool> = sqlx::query_scalar(
            r#"
            SELECT delegated_management
            FROM mobile_messaging_settings
            WHERE id = $1
            "#,
        )
        .bind(SETTINGS_ROW_ID)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(delegated.unwrap_or(false))
    }

    async fn set_delegated_management(&self, delegated: bool) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO mobile_messaging_settings (id, delegated_management)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE
            SET delegated_management = EXCLUDED.delegated_management
            "#,
        )
        .bind(SETTINGS_ROW_ID)
        .bind(delegated)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn sms_credentials(&self) -> Result<Option<SmsCredentials>, AppError> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            r#"
            SELECT sms_provider, sms_api_key
            FROM mobile_messaging_settings
            WHERE id = $1
            "#,
        )
        .bind(SETTINGS_ROW_ID)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.and_then(|r| match (r.sms_provider, r.sms_api_key) {
            (Some(provider), Some(api_key)) => Some(SmsCredentials { provider, api_key }),
            _ => None,
        }))
    }

    async fn set_sms_credentials(&self, credentials: SmsCredentials) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO mobile_messaging_settings (id, sms_provider, sms_api_key)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET sms_provider = EXCLUDED.sms_provider,
                sms_api_key = EXCLUDED.sms_api_key
            "#,
        )
        .bind(SETTINGS_ROW_ID)
        .bind(&credentials.provider)
        .bind(&credentials.api_key)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn phone_numbers(&self, login: &str) -> Result<Vec<PhoneNumber>, AppError> {
        let rows = sqlx::query_as::<_, PhoneNumberRow>(
            r#"
            SELECT number, validated
            FROM phone_numbers
            WHERE login = $1
            ORDER BY created_at, number
            "#,
        )
        .bind(login)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PhoneNumber::from).collect())
    }

    async fn add_phone_number(&self, login: &str, number: &str) -> Result<PhoneNumber, AppError> {
        let row = sqlx::query_as::<_, PhoneNumberRow>(
            r#"
            INSERT INTO phone_numbers (login, number)
            VALUES ($1, $2)
            RETURNING number, validated
            "#,
        )
        .bind(login)
        .bind(number)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
