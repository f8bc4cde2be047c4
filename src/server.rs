//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring and the Axum server
//! lifecycle.

use crate::application::services::{
    AuthService, MessagingSettingsService, VisitFrequencyService, VisitsSummaryReport,
    VisitsSummaryService,
};
use crate::config::Config;
use crate::domain::ports::HealthProbe;
use crate::domain::repositories::{MessagingRepository, TokenRepository, VisitsRepository};
use crate::infrastructure::persistence::{
    PgHealthProbe, PgMessagingRepository, PgTokenRepository, PgVisitsRepository,
};
use crate::infrastructure::reference::{NullIpLocator, StaticCountryDirectory};
use crate::infrastructure::sms::{ClockworkClient, ProviderSmsGateway};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool with the configured limits.
async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Builds the SMS gateway for the configured providers.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn sms_gateway(config: &Config) -> Result<ProviderSmsGateway> {
    let clockwork = ClockworkClient::new(config.clockwork_api_url.clone())
        .map_err(|e| anyhow::anyhow!("Failed to create Clockwork client: {e}"))?;

    Ok(ProviderSmsGateway::new(
        clockwork,
        config.sms_stub_credit.clone(),
    ))
}

/// Wires repositories and services into the shared state.
///
/// # Errors
///
/// Returns an error if an outbound client cannot be built.
pub fn build_state(pool: PgPool, config: &Config) -> Result<AppState> {
    let pool = Arc::new(pool);

    let token_repository: Arc<dyn TokenRepository> =
        Arc::new(PgTokenRepository::new(pool.clone()));
    let visits_repository: Arc<dyn VisitsRepository> =
        Arc::new(PgVisitsRepository::new(pool.clone()));
    let messaging_repository: Arc<dyn MessagingRepository> =
        Arc::new(PgMessagingRepository::new(pool.clone()));

    let visits_summary: Arc<dyn VisitsSummaryReport> =
        Arc::new(VisitsSummaryService::new(visits_repository));

    let messaging_settings = MessagingSettingsService::new(
        messaging_repository,
        Arc::new(StaticCountryDirectory::default()),
        Arc::new(sms_gateway(config)?),
        Arc::new(NullIpLocator::new()),
    );

    let database: Arc<dyn HealthProbe> = Arc::new(PgHealthProbe::new(pool));

    Ok(AppState {
        auth_service: Arc::new(AuthService::new(
            token_repository,
            config.token_signing_secret.clone(),
        )),
        visit_frequency: Arc::new(VisitFrequencyService::new(visits_summary.clone())),
        visits_summary,
        messaging_settings: Arc::new(messaging_settings),
        database,
        behind_proxy: config.behind_proxy,
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Report and settings services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;
    tracing::info!("Migrations applied");

    let state = build_state(pool, &config)?;
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}
