//! Data Transfer Objects for payment endpoints.
//!
//! These types define the JSON request/response shapes for the payment API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::payment::PaymentConfirmationFields;
use crate::ports::FinalizedOrder;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body posted by the storefront after Razorpay checkout completes.
///
/// Fields are kept as raw JSON values: a non-string value is treated the
/// same as an absent one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfirmationRequest {
    #[serde(default)]
    pub razorpay_order_id: Option<Value>,
    #[serde(default)]
    pub razorpay_payment_id: Option<Value>,
    #[serde(default)]
    pub razorpay_signature: Option<Value>,
}

impl PaymentConfirmationRequest {
    /// Parses a request body. An empty or malformed body yields a request
    /// with every field absent.
    pub fn from_json_bytes(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn into_fields(self) -> PaymentConfirmationFields {
        PaymentConfirmationFields {
            order_reference: string_value(self.razorpay_order_id),
            payment_reference: string_value(self.razorpay_payment_id),
            supplied_signature: string_value(self.razorpay_signature),
        }
    }
}

fn string_value(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response after a verified payment has been recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentVerifiedResponse {
    pub message: String,
    pub order_id: String,
    pub payment_id: String,
}

impl From<FinalizedOrder> for PaymentVerifiedResponse {
    fn from(order: FinalizedOrder) -> Self {
        Self {
            message: "Payment verified".to_string(),
            order_id: order.order_reference,
            payment_id: order.payment_reference,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
