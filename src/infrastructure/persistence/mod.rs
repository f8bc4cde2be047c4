//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries. Segment filters are assembled with [`sqlx::QueryBuilder`] so every
//! value is a bound parameter.
//!
//! # Repositories
//!
//! - [`PgVisitsRepository`] - Visit log aggregation
//! - [`PgMessagingRepository`] - SMS account settings and phone numbers
//! - [`PgTokenRepository`] - Users and API token storage
//! - [`PgHealthProbe`] - Database connectivity check

pub mod pg_health_probe;
pub mod pg_messaging_repository;
pub mod pg_token_repository;
pub mod pg_visits_repository;

pub use pg_health_probe::PgHealthProbe;
pub use pg_messaging_repository::PgMessagingRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_visits_repository::PgVisitsRepository;
