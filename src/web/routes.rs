//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_handler, mobile_messaging_handler};
use axum::{Router, routing::get};

/// Dashboard pages that need to know the current user.
///
/// Wrapped by [`crate::web::middleware::web_auth`], which resolves the
/// `auth_token` cookie to an actor (possibly anonymous).
///
/// # Endpoints
///
/// - `GET /settings/mobile-messaging` - SMS account and phone number settings
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/settings/mobile-messaging", get(mobile_messaging_handler))
}

/// Public dashboard routes without authentication.
///
/// # Endpoints
///
/// - `GET /login` - Login page
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_handler))
}
