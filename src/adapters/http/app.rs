//! Top-level router assembly.
//!
//! Mounts the payment routes under `/api`, adds a liveness probe, and wraps
//! everything in the tracing, timeout and CORS layers.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

use super::payment::{payment_router, PaymentAppState};

/// Builds the service router.
///
/// # Routes
/// - `GET /healthz` - Liveness probe
/// - `POST /api/payments/verify` - Gated payment verification
pub fn app_router(state: PaymentAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .nest("/api", payment_router(state.verifier.clone()))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(cors_layer(server)),
        )
}

/// CORS for the storefront and admin dashboard origins.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}
