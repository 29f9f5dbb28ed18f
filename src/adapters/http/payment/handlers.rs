//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.
//! Every handler here runs behind the payment signature gate.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireVerifiedPayment;
use crate::application::handlers::payment::{
    FinalizeVerifiedOrderCommand, FinalizeVerifiedOrderHandler,
};
use crate::domain::payment::PaymentSignatureVerifier;
use crate::ports::{OrderFinalizationError, OrderFinalizer};

use super::dto::{ErrorResponse, PaymentVerifiedResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for payment routes.
#[derive(Clone)]
pub struct PaymentAppState {
    pub verifier: Arc<PaymentSignatureVerifier>,
    pub order_finalizer: Arc<dyn OrderFinalizer>,
}

impl PaymentAppState {
    pub fn new(
        verifier: Arc<PaymentSignatureVerifier>,
        order_finalizer: Arc<dyn OrderFinalizer>,
    ) -> Self {
        Self {
            verifier,
            order_finalizer,
        }
    }

    pub fn finalize_order_handler(&self) -> FinalizeVerifiedOrderHandler {
        FinalizeVerifiedOrderHandler::new(self.order_finalizer.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/payments/verify - Finalize the order for a verified payment
pub async fn verify_payment(
    State(state): State<PaymentAppState>,
    RequireVerifiedPayment(payment): RequireVerifiedPayment,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.finalize_order_handler();
    let order = handler
        .handle(FinalizeVerifiedOrderCommand { payment })
        .await?;

    Ok(Json(PaymentVerifiedResponse::from(order)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts finalization errors to HTTP responses.
pub struct PaymentApiError(OrderFinalizationError);

impl From<OrderFinalizationError> for PaymentApiError {
    fn from(err: OrderFinalizationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        let message = match &self.0 {
            OrderFinalizationError::Storage(detail) => {
                tracing::error!(error = %detail, "order finalization failed");
                "Order could not be updated".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse::new(self.0.error_code(), message))).into_response()
    }
}
