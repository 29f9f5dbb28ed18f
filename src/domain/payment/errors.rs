//! Payment verification error types.
//!
//! Every verification attempt resolves to `Verified` or exactly one of the
//! errors below. Each error maps to an HTTP status and a caller-safe message.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by the payment verification gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// One or more of order id, payment id or signature is absent or empty.
    #[error("Missing required payment fields")]
    MissingFields,

    /// All fields were present but the signature does not match.
    #[error("Invalid signature")]
    InvalidSignature,

    /// The verification computation could not run.
    ///
    /// The detail is for server-side logs only.
    #[error("Internal verification error: {0}")]
    Internal(String),
}

impl VerificationError {
    /// Creates an internal error with a diagnostic detail.
    pub fn internal(detail: impl Into<String>) -> Self {
        VerificationError::Internal(detail.into())
    }

    /// Maps the error to the HTTP status returned to the caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            VerificationError::MissingFields | VerificationError::InvalidSignature => {
                StatusCode::BAD_REQUEST
            }
            VerificationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for JSON error bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            VerificationError::MissingFields => "MISSING_FIELDS",
            VerificationError::InvalidSignature => "INVALID_SIGNATURE",
            VerificationError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to return to the caller.
    ///
    /// Never includes the internal detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            VerificationError::MissingFields => "Missing required payment verification fields",
            VerificationError::InvalidSignature => "Invalid payment signature",
            VerificationError::Internal(_) => "Payment verification is temporarily unavailable",
        }
    }

    /// True for failures that should be recorded as security events.
    pub fn is_security_event(&self) -> bool {
        matches!(self, VerificationError::InvalidSignature)
    }
}
