//! Cookie-based authentication middleware for web dashboard.

use std::net::IpAddr;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::Response,
};

use crate::domain::entities::Actor;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip;

/// Name of the cookie carrying the dashboard token.
pub const AUTH_COOKIE: &str = "auth_token";

/// Who is asking, and from where.
///
/// Inserted into request extensions by [`layer`] for every dashboard page.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub actor: Actor,
    pub client_ip: Option<IpAddr>,
}

fn auth_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(AUTH_COOKIE), Some(value)) if !value.is_empty() => {
                        Some(value.to_string())
                    }
                    _ => None,
                }
            })
        })
}

/// Resolves the dashboard user from the `auth_token` cookie.
///
/// ```text
/// Cookie: auth_token=<token>
/// ```
///
/// A missing, unknown or revoked token yields the anonymous actor rather
/// than a rejection; each page decides whether anonymous access is allowed
/// and redirects to `/dashboard/login` otherwise.
///
/// # Errors
///
/// Returns [`AppError::Internal`] when the token store cannot be queried.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let actor = match auth_cookie(req.headers()) {
        Some(token) => match st.auth_service.authenticate(&token).await {
            Ok(actor) => actor,
            Err(AppError::Unauthorized { .. }) => {
                tracing::debug!("Dashboard token rejected");
                Actor::anonymous()
            }
            Err(e) => {
                tracing::error!(error = %e, "Dashboard authentication failed");
                return Err(e);
            }
        },
        None => Actor::anonymous(),
    };

    let client_ip = client_ip(req.headers(), req.extensions(), st.behind_proxy);
    req.extensions_mut()
        .insert(RequestContext { actor, client_ip });

    Ok(next.run(req).await)
}
