//! PostgreSQL connectivity check.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::ports::HealthProbe;
use crate::error::AppError;

/// Checks the database by counting registered sites.
pub struct PgHealthProbe {
    pool: Arc<PgPool>,
}

impl PgHealthProbe {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthProbe for PgHealthProbe {
    async fn check(&self) -> Result<String, AppError> {
        let sites: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sites")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(format!("Connected, {sites} site(s)"))
    }
}
