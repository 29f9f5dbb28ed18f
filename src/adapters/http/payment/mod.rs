//! HTTP adapter for payment endpoints.
//!
//! Exposes payment verification via REST API:
//! - `POST /api/payments/verify` - Verify a Razorpay checkout signature and finalize the order

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::PaymentAppState;
pub use routes::payment_router;
