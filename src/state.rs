//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AuthService, MessagingSettingsService, VisitFrequencyService, VisitsSummaryReport,
};
use crate::domain::ports::HealthProbe;
use crate::domain::repositories::TokenRepository;

/// Services behind the HTTP layer.
///
/// Every field is an `Arc` to an immutable service, so cloning the state per
/// request is cheap. Collaborators are trait objects; the server wires the
/// PostgreSQL implementations and tests wire in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<dyn TokenRepository>>,
    pub visits_summary: Arc<dyn VisitsSummaryReport>,
    pub visit_frequency: Arc<VisitFrequencyService<dyn VisitsSummaryReport>>,
    pub messaging_settings: Arc<MessagingSettingsService>,
    pub database: Arc<dyn HealthProbe>,
    /// Trust `X-Forwarded-For` / `X-Real-IP` for the client address.
    pub behind_proxy: bool,
}
