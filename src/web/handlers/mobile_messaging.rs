//! Mobile messaging settings page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::services::MessagingSettingsView;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::LOGIN_PATH;
use crate::web::middleware::RequestContext;

/// Template for the mobile messaging settings page.
#[derive(Template, WebTemplate)]
#[template(path = "mobile_messaging.html")]
pub struct MobileMessagingTemplate {
    pub login: String,
    pub settings: MessagingSettingsView,
}

/// Renders the SMS account and phone number settings.
///
/// # Endpoint
///
/// `GET /dashboard/settings/mobile-messaging`
///
/// Anonymous visitors are redirected to the login page.
pub async fn mobile_messaging_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<Response, AppError> {
    match state
        .messaging_settings
        .settings_view(&ctx.actor, ctx.client_ip)
        .await
    {
        Ok(settings) => Ok(MobileMessagingTemplate {
            login: ctx.actor.login,
            settings,
        }
        .into_response()),
        Err(AppError::Unauthorized { .. }) => Ok(Redirect::to(LOGIN_PATH).into_response()),
        Err(e) => Err(e),
    }
}
