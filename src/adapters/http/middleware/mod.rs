//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `payment_signature` - Razorpay payment signature gate and extractor

pub mod payment_signature;

pub use payment_signature::{
    require_payment_signature, verification_rejection, PaymentGateRejection,
    RequireVerifiedPayment, VerifierState, MAX_CONFIRMATION_BODY_BYTES,
};
