//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::web::middleware::web_auth::AUTH_COOKIE;

/// Template for the login page.
///
/// The form stores the entered API token in the `auth_token` cookie.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    cookie_name: &'static str,
    redirect_to: &'static str,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /dashboard/login`
pub async fn login_handler() -> impl IntoResponse {
    LoginTemplate {
        cookie_name: AUTH_COOKIE,
        redirect_to: super::MOBILE_MESSAGING_PATH,
    }
}
