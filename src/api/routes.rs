//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{visit_frequency_handler, visits_summary_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET /visit-frequency` - Visits summary for returning visitors, `_returning` columns
/// - `GET /visits-summary`  - General visits summary
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/visit-frequency", get(visit_frequency_handler))
        .route("/visits-summary", get(visits_summary_handler))
}
