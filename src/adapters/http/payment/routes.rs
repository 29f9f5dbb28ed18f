//! Axum router configuration for payment endpoints.

use axum::{middleware, routing::post, Router};

use crate::adapters::http::middleware::{require_payment_signature, VerifierState};

use super::handlers::{verify_payment, PaymentAppState};

/// Create the payment API router.
///
/// # Routes
///
/// ## Gated Endpoints (Razorpay signature verified)
/// - `POST /verify` - Finalize the order for a verified checkout payment
///
/// The gate is a `route_layer`, so unmatched paths still 404 instead of
/// being verified.
pub fn payment_routes(verifier: VerifierState) -> Router<PaymentAppState> {
    Router::new()
        .route("/verify", post(verify_payment))
        .route_layer(middleware::from_fn_with_state(
            verifier,
            require_payment_signature,
        ))
}

/// Create the complete payment module router.
///
/// Suitable for mounting at `/api`.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use crate::adapters::http::payment::{payment_router, PaymentAppState};
///
/// let state = PaymentAppState::new(verifier, finalizer);
/// let app = Router::new()
///     .nest("/api", payment_router(state.verifier.clone()))
///     .with_state(state);
/// ```
pub fn payment_router(verifier: VerifierState) -> Router<PaymentAppState> {
    Router::new().nest("/payments", payment_routes(verifier))
}
