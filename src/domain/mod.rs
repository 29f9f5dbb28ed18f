//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `payment` - Razorpay payment confirmation and signature verification

pub mod payment;
