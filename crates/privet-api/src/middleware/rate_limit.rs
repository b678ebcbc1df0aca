use axum::Router;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Token bucket settings for one group of routes, keyed by client IP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// One request is replenished every `replenish_ms` milliseconds
    pub replenish_ms: u64,
    pub burst_size: u32,
}

/// Login and registration: 5 requests per second, burst of 10
pub const AUTH: RateLimit = RateLimit {
    replenish_ms: 200,
    burst_size: 10,
};

/// Drill and profile routes: 10 requests per second, burst of 20
pub const GENERAL: RateLimit = RateLimit {
    replenish_ms: 100,
    burst_size: 20,
};

/// Wrap `router` with a per-IP rate limiter.
///
/// The client IP comes from `X-Forwarded-For`, `X-Real-IP` or `Forwarded`,
/// falling back to the peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn apply_rate_limit<S>(router: Router<S>, limit: RateLimit) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let config = GovernorConfigBuilder::default()
        .per_millisecond(limit.replenish_ms)
        .burst_size(limit.burst_size)
        .key_extractor(SmartIpKeyExtractor)
        .finish();

    match config {
        Some(config) => router.layer(GovernorLayer::new(config)),
        None => {
            tracing::warn!(?limit, "rate limit disabled: zero period or burst size");
            router
        }
    }
}
