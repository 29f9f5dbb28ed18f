//! Payment signature gate middleware and extractor for axum.
//!
//! This module provides:
//! - `require_payment_signature` - Layer that verifies the Razorpay signature in the body
//! - `RequireVerifiedPayment` - Extractor for the verified payment in downstream handlers
//!
//! # Architecture
//!
//! ```text
//! Request → require_payment_signature → verifies body, injects VerifiedPayment
//!                                              ↓
//!                              Handler → RequireVerifiedPayment reads from extensions
//! ```
//!
//! On rejection the middleware answers with `{"error_code", "message"}` and
//! the handler never runs, so no order state can change.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::post, middleware};
//! use std::sync::Arc;
//!
//! let verifier = Arc::new(PaymentSignatureVerifier::new(SharedSecret::new(secret)));
//!
//! let app = Router::new()
//!     .route("/api/payments/verify", post(handler))
//!     .route_layer(middleware::from_fn_with_state(verifier, require_payment_signature));
//! ```

use std::sync::Arc;

use axum::{
    body::{self, Body},
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::payment::dto::{ErrorResponse, PaymentConfirmationRequest};
use crate::domain::payment::{
    PaymentSignatureVerifier, VerificationError, VerificationOutcome, VerifiedPayment,
};

/// Gate middleware state - the shared verifier.
pub type VerifierState = Arc<PaymentSignatureVerifier>;

/// Largest confirmation body the gate will buffer.
pub const MAX_CONFIRMATION_BODY_BYTES: usize = 64 * 1024;

/// Middleware that admits a request only if its payment signature verifies.
///
/// This middleware:
/// 1. Buffers the JSON body and reads `razorpay_order_id`,
///    `razorpay_payment_id` and `razorpay_signature`
/// 2. Runs the verifier
/// 3. On success, injects `VerifiedPayment` into request extensions and
///    forwards the request with its original body
/// 4. On failure, returns the error's status with a JSON message
pub async fn require_payment_signature(
    State(verifier): State<VerifierState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();

    let bytes = match body::to_bytes(body, MAX_CONFIRMATION_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "payment confirmation body unreadable");
            return verification_rejection(&VerificationError::MissingFields);
        }
    };

    let fields = PaymentConfirmationRequest::from_json_bytes(&bytes).into_fields();
    let result = verifier.verify(fields.clone());
    let outcome = VerificationOutcome::from(&result);

    match result {
        Ok(payment) => {
            tracing::debug!(
                order_id = %payment.order_reference(),
                payment_id = %payment.payment_reference(),
                outcome = outcome.as_str(),
                "payment signature verified"
            );
            parts.extensions.insert(payment);
            next.run(Request::from_parts(parts, Body::from(bytes))).await
        }
        Err(err) => {
            match &err {
                VerificationError::InvalidSignature => {
                    tracing::warn!(
                        order_id = fields.order_reference.as_deref().unwrap_or_default(),
                        payment_id = fields.payment_reference.as_deref().unwrap_or_default(),
                        outcome = outcome.as_str(),
                        security_event = err.is_security_event(),
                        "payment signature mismatch"
                    );
                }
                VerificationError::MissingFields => {
                    tracing::warn!(
                        has_order_id = fields.order_reference.is_some(),
                        has_payment_id = fields.payment_reference.is_some(),
                        has_signature = fields.supplied_signature.is_some(),
                        outcome = outcome.as_str(),
                        "payment confirmation missing fields"
                    );
                }
                VerificationError::Internal(detail) => {
                    tracing::error!(
                        error = %detail,
                        outcome = outcome.as_str(),
                        "payment verification could not run"
                    );
                }
            }
            verification_rejection(&err)
        }
    }
}

/// Builds the JSON rejection for a verification error.
pub fn verification_rejection(err: &VerificationError) -> Response {
    (
        err.status_code(),
        Json(ErrorResponse::new(err.error_code(), err.public_message())),
    )
        .into_response()
}

/// Extractor that requires a payment admitted by the gate.
///
/// Returns 500 if used on a route that is not behind
/// `require_payment_signature`.
#[derive(Debug, Clone)]
pub struct RequireVerifiedPayment(pub VerifiedPayment);

impl<S> axum::extract::FromRequestParts<S> for RequireVerifiedPayment
where
    S: Send + Sync,
{
    type Rejection = PaymentGateRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<VerifiedPayment>()
                .cloned()
                .map(RequireVerifiedPayment)
                .ok_or(PaymentGateRejection::GateNotApplied)
        })
    }
}

/// Rejection type for `RequireVerifiedPayment`.
#[derive(Debug, Clone)]
pub enum PaymentGateRejection {
    /// The route was reached without passing through the gate.
    GateNotApplied,
}

impl IntoResponse for PaymentGateRejection {
    fn into_response(self) -> Response {
        match self {
            PaymentGateRejection::GateNotApplied => {
                tracing::error!("verified payment requested on a route without the payment gate");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(
                        "INTERNAL_ERROR",
                        VerificationError::internal("gate not applied").public_message(),
                    )),
                )
                    .into_response()
            }
        }
    }
}
