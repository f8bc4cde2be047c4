//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (public)
//! - `/api/*`            - Report API (Bearer token required)
//! - `/dashboard/*`      - Settings pages (cookie session)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer token (API) or cookie session (web)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, Limits};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Rate limiting keys clients by peer address, or by forwarding headers when
/// `state.behind_proxy` is set. The peer address comes from
/// `ConnectInfo<SocketAddr>`, so the router must be served with
/// `into_make_service_with_connect_info`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let behind_proxy = state.behind_proxy;
    let router = compose(state, |router, limits| {
        rate_limit::apply(router, limits, behind_proxy)
    });

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Same routes as [`app_router`] without rate limiting or trailing-slash
/// normalization.
///
/// Used where no peer address is available, such as in-process tests.
pub fn router_without_rate_limits(state: AppState) -> Router {
    compose(state, |router, _| router)
}

fn compose<F>(state: AppState, limit: F) -> Router
where
    F: Fn(Router<AppState>, Limits) -> Router<AppState>,
{
    let api_router = limit(
        api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        rate_limit::SECURE,
    );

    let web_protected = limit(
        web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        )),
        rate_limit::SECURE,
    );

    let web_public = limit(web::routes::public_routes(), rate_limit::PUBLIC);

    let web_router = Router::new().merge(web_protected).merge(web_public);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest("/dashboard", web_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}
