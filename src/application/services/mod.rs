//! Business logic services for the application layer.

pub mod auth_service;
pub mod messaging_settings_service;
pub mod visit_frequency_service;
pub mod visits_summary_service;

pub use auth_service::{AuthService, hash_token};
pub use messaging_settings_service::{MessagingSettingsService, MessagingSettingsView};
pub use visit_frequency_service::VisitFrequencyService;
pub use visits_summary_service::{VisitsSummaryReport, VisitsSummaryService};
