//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::domain::payment::{PaymentSignatureVerifier, SharedSecret};

/// Payment configuration (Razorpay)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Razorpay key id (`rzp_test_...` or `rzp_live_...`)
    pub razorpay_key_id: Option<String>,

    /// Razorpay key secret, the HMAC key for checkout signatures
    pub razorpay_key_secret: Option<SecretString>,
}

impl PaymentConfig {
    /// Check if using Razorpay test mode
    pub fn is_test_mode(&self) -> bool {
        self.razorpay_key_id
            .as_deref()
            .is_some_and(|id| id.starts_with("rzp_test_"))
    }

    /// Check if using Razorpay live mode
    pub fn is_live_mode(&self) -> bool {
        self.razorpay_key_id
            .as_deref()
            .is_some_and(|id| id.starts_with("rzp_live_"))
    }

    /// Check if a key secret was provided
    pub fn has_key_secret(&self) -> bool {
        self.razorpay_key_secret.is_some()
    }

    /// The signing secret, if configured
    pub fn shared_secret(&self) -> Option<SharedSecret> {
        self.razorpay_key_secret.clone().map(SharedSecret::from)
    }

    /// Build the payment signature verifier from this configuration
    pub fn verifier(&self) -> PaymentSignatureVerifier {
        PaymentSignatureVerifier::from_optional(self.shared_secret())
    }

    /// Validate payment configuration
    ///
    /// The key secret is only required in production. Elsewhere a missing
    /// secret leaves the gate answering every complete request with 500.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if let Some(key_id) = &self.razorpay_key_id {
            if !key_id.starts_with("rzp_") {
                return Err(ValidationError::InvalidRazorpayKeyId);
            }
        }

        match &self.razorpay_key_secret {
            Some(secret) if secret.expose_secret().is_empty() => {
                Err(ValidationError::EmptyRazorpayKeySecret)
            }
            None if *environment == Environment::Production => {
                Err(ValidationError::MissingRequired("RAZORPAY_KEY_SECRET"))
            }
            _ => Ok(()),
        }
    }
}
