//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::visits_summary_service::VisitsSummaryService`] - Visit metrics per site and period
//! - [`services::visit_frequency_service::VisitFrequencyService`] - Returning-visitor view of the summary
//! - [`services::messaging_settings_service::MessagingSettingsService`] - Mobile messaging settings page data
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
