//! Razorpay checkout signature computation.
//!
//! Razorpay signs `"{order_id}|{payment_id}"` with HMAC-SHA256 keyed by the
//! merchant key secret and sends the lowercase hex digest. The message
//! layout must match byte for byte.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::VerificationError;
use super::shared_secret::SharedSecret;

type HmacSha256 = Hmac<Sha256>;

/// Separator between order id and payment id in the signed message.
pub const MESSAGE_SEPARATOR: char = '|';

/// Builds the exact message the provider signed.
pub fn canonical_message(order_reference: &str, payment_reference: &str) -> String {
    format!("{order_reference}{MESSAGE_SEPARATOR}{payment_reference}")
}

/// Computes the lowercase hex HMAC-SHA256 of the canonical message.
///
/// # Errors
///
/// Returns `VerificationError::Internal` if the HMAC primitive rejects the key.
pub fn compute_signature(
    secret: &SharedSecret,
    order_reference: &str,
    payment_reference: &str,
) -> Result<String, VerificationError> {
    let mut mac = HmacSha256::new_from_slice(secret.expose_bytes())
        .map_err(|e| VerificationError::internal(format!("HMAC key rejected: {e}")))?;
    mac.update(canonical_message(order_reference, payment_reference).as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Constant-time equality for the computed and supplied signatures.
///
/// Differing lengths return early; equal lengths are compared without
/// short-circuiting.
pub(super) fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: &str = "order_ABC123";
    const PAYMENT: &str = "pay_XYZ789";
    const EXPECTED: &str = "8ab882b69975648bd036bb84b853484100f7addce5cead23e8a2d9ffe5ba21c8";

    // ══════════════════════════════════════════════════════════════
    // Canonical Message Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn canonical_message_joins_with_pipe() {
        assert_eq!(canonical_message(ORDER, PAYMENT), "order_ABC123|pay_XYZ789");
    }

    #[test]
    fn canonical_message_keeps_whitespace() {
        assert_eq!(canonical_message(" a", "b "), " a|b ");
    }

    // ══════════════════════════════════════════════════════════════
    // Signature Computation Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn known_vector_matches() {
        let secret = SharedSecret::new("testsecret");
        let signature = compute_signature(&secret, ORDER, PAYMENT).unwrap();
        assert_eq!(signature, EXPECTED);
    }

    #[test]
    fn signature_is_lowercase_hex_of_32_bytes() {
        let secret = SharedSecret::new("testsecret");
        let signature = compute_signature(&secret, ORDER, PAYMENT).unwrap();

        assert_eq!(signature.len(), 64);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn reversed_order_produces_different_signature() {
        let secret = SharedSecret::new("testsecret");
        let reversed = compute_signature(&secret, PAYMENT, ORDER).unwrap();
        assert_eq!(
            reversed,
            "452f4db82c9f30390ca10d4a23c26f60a99756550c12d132dff41e46dac15d32"
        );
        assert_ne!(reversed, EXPECTED);
    }

    #[test]
    fn empty_key_is_accepted_by_primitive() {
        let secret = SharedSecret::new("");
        let signature = compute_signature(&secret, ORDER, PAYMENT).unwrap();
        assert_eq!(
            signature,
            "62e181b53d8fbeded972549ba463271cd80583bb21d1b89063d37a019cbec778"
        );
    }

    // ══════════════════════════════════════════════════════════════
    // Constant Time Comparison Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn constant_time_compare_equal_values() {
        assert!(constant_time_compare(b"abc123", b"abc123"));
    }

    #[test]
    fn constant_time_compare_different_values() {
        assert!(!constant_time_compare(b"abc123", b"abc124"));
    }

    #[test]
    fn constant_time_compare_different_lengths() {
        assert!(!constant_time_compare(b"abc", b"abcd"));
    }

    #[test]
    fn constant_time_compare_is_case_sensitive() {
        assert!(!constant_time_compare(b"8ab8", b"8AB8"));
    }
}
