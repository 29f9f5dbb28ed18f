//! Payment confirmation value types.
//!
//! `PaymentConfirmationFields` is what arrives from the caller, with any
//! field possibly absent. `PaymentConfirmation` exists only once all three
//! fields are present. `VerifiedPayment` exists only after the signature
//! has been checked.

use serde::Serialize;

use super::errors::VerificationError;

/// Raw confirmation fields as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentConfirmationFields {
    pub order_reference: Option<String>,
    pub payment_reference: Option<String>,
    pub supplied_signature: Option<String>,
}

impl PaymentConfirmationFields {
    /// Creates a set of fields where every value is present.
    pub fn new(
        order_reference: impl Into<String>,
        payment_reference: impl Into<String>,
        supplied_signature: impl Into<String>,
    ) -> Self {
        Self {
            order_reference: Some(order_reference.into()),
            payment_reference: Some(payment_reference.into()),
            supplied_signature: Some(supplied_signature.into()),
        }
    }

    /// Checks that all three fields are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `VerificationError::MissingFields` if any field is absent or
    /// the empty string.
    pub fn complete(self) -> Result<PaymentConfirmation, VerificationError> {
        match (
            non_empty(self.order_reference),
            non_empty(self.payment_reference),
            non_empty(self.supplied_signature),
        ) {
            (Some(order_reference), Some(payment_reference), Some(supplied_signature)) => {
                Ok(PaymentConfirmation {
                    order_reference,
                    payment_reference,
                    supplied_signature,
                })
            }
            _ => Err(VerificationError::MissingFields),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A confirmation with all three fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    order_reference: String,
    payment_reference: String,
    supplied_signature: String,
}

impl PaymentConfirmation {
    pub fn order_reference(&self) -> &str {
        &self.order_reference
    }

    pub fn payment_reference(&self) -> &str {
        &self.payment_reference
    }

    pub fn supplied_signature(&self) -> &str {
        &self.supplied_signature
    }

    pub(super) fn into_verified(self) -> VerifiedPayment {
        VerifiedPayment {
            order_reference: self.order_reference,
            payment_reference: self.payment_reference,
            signature: self.supplied_signature,
        }
    }
}

/// A payment whose signature matched the shared secret.
///
/// Only the verifier can construct this type, so holding one is proof that
/// the gate admitted the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedPayment {
    order_reference: String,
    payment_reference: String,
    #[serde(skip)]
    signature: String,
}

impl VerifiedPayment {
    pub fn order_reference(&self) -> &str {
        &self.order_reference
    }

    pub fn payment_reference(&self) -> &str {
        &self.payment_reference
    }

    /// The provider signature, kept for downstream record keeping.
    pub fn signature(&self) -> &str {
        &self.signature
    }
}
