//! OrderFinalizer port - Interface for recording a verified payment against an order.
//!
//! The payment gate never mutates order state itself. Once a confirmation is
//! verified, the downstream handler hands the `VerifiedPayment` to this port.
//! Implementations must be idempotent for repeated delivery of the same
//! order and payment pair, since customers may resubmit a confirmation.

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::domain::payment::VerifiedPayment;

/// Record of an order that has been marked paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalizedOrder {
    /// Razorpay order id.
    pub order_reference: String,

    /// Razorpay payment id that settled the order.
    pub payment_reference: String,

    /// When the order was first finalized.
    pub finalized_at: DateTime<Utc>,
}

/// Errors from order finalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderFinalizationError {
    /// No pending order exists for the reference.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// The order was already settled by a different payment.
    #[error("Order {order_reference} already paid by another payment")]
    AlreadyPaid { order_reference: String },

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl OrderFinalizationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderFinalizationError::OrderNotFound(_) => StatusCode::NOT_FOUND,
            OrderFinalizationError::AlreadyPaid { .. } => StatusCode::CONFLICT,
            OrderFinalizationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            OrderFinalizationError::OrderNotFound(_) => "ORDER_NOT_FOUND",
            OrderFinalizationError::AlreadyPaid { .. } => "ORDER_ALREADY_PAID",
            OrderFinalizationError::Storage(_) => "INTERNAL_ERROR",
        }
    }
}

/// Port for marking orders paid after signature verification.
#[async_trait]
pub trait OrderFinalizer: Send + Sync {
    /// Records the verified payment against its order.
    ///
    /// Repeating the call with the same order and payment returns the
    /// existing record.
    async fn finalize(
        &self,
        payment: &VerifiedPayment,
    ) -> Result<FinalizedOrder, OrderFinalizationError>;
}
