//! Razorpay payment signature verification.
//!
//! The verifier is the payment gate: it admits a confirmation only when the
//! supplied signature equals the HMAC-SHA256 of `order_id|payment_id` under
//! the shared secret.
//!
//! # Verification Steps
//!
//! 1. Require order id, payment id and signature (`MissingFields`)
//! 2. Require a configured, non-empty secret (`Internal`)
//! 3. Compute the expected signature
//! 4. Compare in constant time (`InvalidSignature`)
//!
//! Verification performs no I/O and holds no mutable state, so one verifier
//! can be shared across any number of concurrent requests.

use super::confirmation::{PaymentConfirmation, PaymentConfirmationFields, VerifiedPayment};
use super::errors::VerificationError;
use super::shared_secret::SharedSecret;
use super::signature::{compute_signature, constant_time_compare};

/// Terminal state of one verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    MissingFields,
    InvalidSignature,
    InternalError,
}

impl VerificationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationOutcome::Verified => "verified",
            VerificationOutcome::MissingFields => "missing_fields",
            VerificationOutcome::InvalidSignature => "invalid_signature",
            VerificationOutcome::InternalError => "internal_error",
        }
    }
}

impl From<&Result<VerifiedPayment, VerificationError>> for VerificationOutcome {
    fn from(result: &Result<VerifiedPayment, VerificationError>) -> Self {
        match result {
            Ok(_) => VerificationOutcome::Verified,
            Err(VerificationError::MissingFields) => VerificationOutcome::MissingFields,
            Err(VerificationError::InvalidSignature) => VerificationOutcome::InvalidSignature,
            Err(VerificationError::Internal(_)) => VerificationOutcome::InternalError,
        }
    }
}

/// Verifier for Razorpay checkout payment signatures.
#[derive(Debug, Clone)]
pub struct PaymentSignatureVerifier {
    /// Razorpay key secret; `None` when the deployment did not provide one.
    secret: Option<SharedSecret>,
}

impl PaymentSignatureVerifier {
    /// Creates a verifier keyed by the given secret.
    pub fn new(secret: SharedSecret) -> Self {
        Self {
            secret: Some(secret),
        }
    }

    /// Creates a verifier with no secret. Every complete confirmation fails
    /// with `VerificationError::Internal`.
    pub fn unconfigured() -> Self {
        Self { secret: None }
    }

    /// Creates a verifier from an optional secret, as loaded from config.
    pub fn from_optional(secret: Option<SharedSecret>) -> Self {
        Self { secret }
    }

    /// True when a non-empty secret is available.
    pub fn is_configured(&self) -> bool {
        self.secret.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// Verifies raw confirmation fields.
    ///
    /// # Errors
    ///
    /// - `MissingFields` - a field is absent or empty; no HMAC is computed
    /// - `Internal` - the secret is missing or the HMAC primitive failed
    /// - `InvalidSignature` - the signature does not match
    pub fn verify(
        &self,
        fields: PaymentConfirmationFields,
    ) -> Result<VerifiedPayment, VerificationError> {
        let confirmation = fields.complete()?;
        self.verify_confirmation(confirmation)
    }

    /// Verifies a confirmation whose fields are already known to be present.
    pub fn verify_confirmation(
        &self,
        confirmation: PaymentConfirmation,
    ) -> Result<VerifiedPayment, VerificationError> {
        let expected = self.expected_signature(
            confirmation.order_reference(),
            confirmation.payment_reference(),
        )?;

        if !constant_time_compare(
            expected.as_bytes(),
            confirmation.supplied_signature().as_bytes(),
        ) {
            return Err(VerificationError::InvalidSignature);
        }

        Ok(confirmation.into_verified())
    }

    /// Computes the signature the provider would send for this order and
    /// payment pair.
    pub fn expected_signature(
        &self,
        order_reference: &str,
        payment_reference: &str,
    ) -> Result<String, VerificationError> {
        let secret = self
            .secret
            .as_ref()
            .ok_or_else(|| VerificationError::internal("payment secret is not configured"))?;
        if secret.is_empty() {
            return Err(VerificationError::internal("payment secret is empty"));
        }
        compute_signature(secret, order_reference, payment_reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "testsecret";
    const ORDER: &str = "order_ABC123";
    const PAYMENT: &str = "pay_XYZ789";
    const VALID_SIGNATURE: &str =
        "8ab882b69975648bd036bb84b853484100f7addce5cead23e8a2d9ffe5ba21c8";

    fn verifier() -> PaymentSignatureVerifier {
        PaymentSignatureVerifier::new(SharedSecret::new(TEST_SECRET))
    }

    // ══════════════════════════════════════════════════════════════
    // Signature Verification Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_valid_signature() {
        let fields = PaymentConfirmationFields::new(ORDER, PAYMENT, VALID_SIGNATURE);

        let verified = verifier().verify(fields).unwrap();

        assert_eq!(verified.order_reference(), ORDER);
        assert_eq!(verified.payment_reference(), PAYMENT);
        assert_eq!(verified.signature(), VALID_SIGNATURE);
    }

    #[test]
    fn verify_invalid_signature_fails() {
        let fields = PaymentConfirmationFields::new(ORDER, PAYMENT, "a".repeat(64));

        let result = verifier().verify(fields);

        assert_eq!(result, Err(VerificationError::InvalidSignature));
    }

    #[test]
    fn verify_wrong_secret_fails() {
        let verifier = PaymentSignatureVerifier::new(SharedSecret::new("wrong_secret"));
        let fields = PaymentConfirmationFields::new(ORDER, PAYMENT, VALID_SIGNATURE);

        assert_eq!(verifier.verify(fields), Err(VerificationError::InvalidSignature));
    }

    #[test]
    fn verify_tampered_payment_id_fails() {
        let fields = PaymentConfirmationFields::new(ORDER, "pay_XYZ780", VALID_SIGNATURE);

        assert_eq!(verifier().verify(fields), Err(VerificationError::InvalidSignature));
    }

    #[test]
    fn verify_uppercase_signature_fails() {
        let fields =
            PaymentConfirmationFields::new(ORDER, PAYMENT, VALID_SIGNATURE.to_uppercase());

        assert_eq!(verifier().verify(fields), Err(VerificationError::InvalidSignature));
    }

    #[test]
    fn verify_truncated_signature_fails() {
        let fields = PaymentConfirmationFields::new(ORDER, PAYMENT, &VALID_SIGNATURE[..63]);

        assert_eq!(verifier().verify(fields), Err(VerificationError::InvalidSignature));
    }

    // ══════════════════════════════════════════════════════════════
    // Missing Field Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn missing_fields_take_precedence_over_unconfigured_secret() {
        let verifier = PaymentSignatureVerifier::unconfigured();

        let result = verifier.verify(PaymentConfirmationFields::default());

        assert_eq!(result, Err(VerificationError::MissingFields));
    }

    #[test]
    fn missing_signature_is_not_invalid_signature() {
        let fields = PaymentConfirmationFields {
            order_reference: Some(ORDER.to_string()),
            payment_reference: Some(PAYMENT.to_string()),
            supplied_signature: None,
        };

        assert_eq!(verifier().verify(fields), Err(VerificationError::MissingFields));
    }

    // ══════════════════════════════════════════════════════════════
    // Secret Configuration Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn unconfigured_secret_is_internal_error() {
        let verifier = PaymentSignatureVerifier::unconfigured();
        let fields = PaymentConfirmationFields::new(ORDER, PAYMENT, VALID_SIGNATURE);

        let result = verifier.verify(fields);

        assert!(matches!(result, Err(VerificationError::Internal(_))));
        assert!(!verifier.is_configured());
    }

    #[test]
    fn empty_secret_is_internal_error() {
        let verifier = PaymentSignatureVerifier::new(SharedSecret::new(""));
        let fields = PaymentConfirmationFields::new(ORDER, PAYMENT, VALID_SIGNATURE);

        assert!(matches!(
            verifier.verify(fields),
            Err(VerificationError::Internal(_))
        ));
        assert!(!verifier.is_configured());
    }

    #[test]
    fn from_optional_with_secret_is_configured() {
        let verifier = PaymentSignatureVerifier::from_optional(Some(SharedSecret::new("k")));
        assert!(verifier.is_configured());
    }

    // ══════════════════════════════════════════════════════════════
    // Outcome Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn outcome_classifies_every_result() {
        let verified = verifier().verify(PaymentConfirmationFields::new(
            ORDER,
            PAYMENT,
            VALID_SIGNATURE,
        ));
        let invalid = verifier().verify(PaymentConfirmationFields::new(ORDER, PAYMENT, "bad"));
        let missing = verifier().verify(PaymentConfirmationFields::default());
        let internal = PaymentSignatureVerifier::unconfigured().verify(
            PaymentConfirmationFields::new(ORDER, PAYMENT, VALID_SIGNATURE),
        );

        assert_eq!(VerificationOutcome::from(&verified), VerificationOutcome::Verified);
        assert_eq!(
            VerificationOutcome::from(&invalid),
            VerificationOutcome::InvalidSignature
        );
        assert_eq!(
            VerificationOutcome::from(&missing),
            VerificationOutcome::MissingFields
        );
        assert_eq!(
            VerificationOutcome::from(&internal),
            VerificationOutcome::InternalError
        );
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(VerificationOutcome::Verified.as_str(), "verified");
        assert_eq!(
            VerificationOutcome::InvalidSignature.as_str(),
            "invalid_signature"
        );
    }

    #[test]
    fn expected_signature_matches_known_vector() {
        assert_eq!(
            verifier().expected_signature(ORDER, PAYMENT).unwrap(),
            VALID_SIGNATURE
        );
    }
}
