//! Route configuration and setup

use crate::constants::{HEALTH_PATH, MAX_PAYLOAD_BYTES, WEBHOOK_PATH};
use crate::handlers;
use crate::state::AppState;
use axum::routing::any;
use axum::Router;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Build the relay router.
///
/// Both routes answer any method: the health probe deliberately, the webhook
/// because its contract reports a wrong method as 400 with the reason in the
/// body, which means the handler has to see the request.
pub fn relay_router(state: Arc<AppState>) -> Router {
    // Server-level concurrency limit to protect against resource exhaustion under extreme load
    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000)
        .max(1);

    Router::new()
        .route(HEALTH_PATH, any(handlers::health))
        .route(WEBHOOK_PATH, any(handlers::receive_webhook))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(RequestBodyLimitLayer::new(MAX_PAYLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
