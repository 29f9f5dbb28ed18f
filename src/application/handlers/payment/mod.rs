//! Payment handlers.
//!
//! ## Commands
//! - Finalizing an order once its payment signature has been verified

mod finalize_verified_order;

pub use finalize_verified_order::{FinalizeVerifiedOrderCommand, FinalizeVerifiedOrderHandler};
