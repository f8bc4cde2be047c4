//! Per-client rate limiting using a token bucket.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

type RateLimitLayer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Token bucket parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Seconds between token refills.
    pub per_second: u64,
    pub burst_size: u32,
}

/// Public pages: one token every 2 seconds, bursts of 100.
pub const PUBLIC: Limits = Limits {
    per_second: 2,
    burst_size: 100,
};

/// Authenticated endpoints: one token per second, bursts of 10.
pub const SECURE: Limits = Limits {
    per_second: 1,
    burst_size: 10,
};

fn governor_layer<K: KeyExtractor>(key_extractor: K, limits: Limits) -> Option<RateLimitLayer<K>> {
    let config = GovernorConfigBuilder::default()
        .key_extractor(key_extractor)
        .per_second(limits.per_second)
        .burst_size(limits.burst_size)
        .finish()?;

    Some(GovernorLayer::new(Arc::new(config)))
}

/// Applies a rate limiter to `router`.
///
/// Clients are keyed by peer IP, or by `X-Forwarded-For` / `X-Real-IP` when
/// `behind_proxy` is set. Requests over the limit receive
/// `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let api = rate_limit::apply(api_routes(), rate_limit::SECURE, config.behind_proxy);
/// ```
pub fn apply(router: Router<AppState>, limits: Limits, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        if let Some(layer) = governor_layer(SmartIpKeyExtractor, limits) {
            return router.layer(layer);
        }
    } else if let Some(layer) = governor_layer(PeerIpKeyExtractor, limits) {
        return router.layer(layer);
    }

    tracing::warn!(?limits, "Invalid rate limit parameters, rate limiting disabled");
    router
}
