//! Payment domain module.
//!
//! Verifies Razorpay checkout confirmations before an order is finalized.
//!
//! # Module Structure
//!
//! - `confirmation` - Confirmation fields, complete confirmations, verified payments
//! - `shared_secret` - The redacted HMAC key
//! - `signature` - Canonical message and HMAC-SHA256 computation
//! - `verifier` - The verification gate
//! - `errors` - Verification error taxonomy

mod confirmation;
mod errors;
mod shared_secret;
mod signature;
mod verifier;

pub use confirmation::{PaymentConfirmation, PaymentConfirmationFields, VerifiedPayment};
pub use errors::VerificationError;
pub use shared_secret::SharedSecret;
pub use signature::{canonical_message, compute_signature, MESSAGE_SEPARATOR};
pub use verifier::{PaymentSignatureVerifier, VerificationOutcome};
