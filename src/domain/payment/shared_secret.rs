//! The Razorpay key secret used as the HMAC key.

use secrecy::{ExposeSecret, SecretString};

/// Process-wide signing secret shared with the payment provider.
///
/// Wraps `SecretString`, so `Debug` is redacted and the value is zeroized
/// on drop. The raw bytes are only reachable inside the payment module.
#[derive(Debug, Clone)]
pub struct SharedSecret(SecretString);

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(SecretString::new(secret.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    pub(super) fn expose_bytes(&self) -> &[u8] {
        self.0.expose_secret().as_bytes()
    }
}

impl From<SecretString> for SharedSecret {
    fn from(secret: SecretString) -> Self {
        Self(secret)
    }
}
