//! Property tests for Razorpay signature verification.

use proptest::prelude::*;

use lush_lilac::domain::payment::{
    compute_signature, PaymentConfirmationFields, PaymentSignatureVerifier, SharedSecret,
    VerificationError,
};

/// Provider ids: ASCII alphanumerics with an underscore prefix, no separator.
fn reference() -> impl Strategy<Value = String> {
    "[a-z]{3,5}_[A-Za-z0-9]{6,18}"
}

fn secret() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,40}"
}

/// Replaces the character at `index` with a different alphanumeric.
fn mutate(value: &str, index: usize) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    let i = index % chars.len();
    chars[i] = if chars[i] == 'Z' { 'Y' } else { 'Z' };
    chars.into_iter().collect()
}

proptest! {
    #[test]
    fn computation_is_deterministic(order in reference(), payment in reference(), key in secret()) {
        let secret = SharedSecret::new(key);
        let first = compute_signature(&secret, &order, &payment).unwrap();
        let second = compute_signature(&secret, &order, &payment).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn computed_signature_verifies(order in reference(), payment in reference(), key in secret()) {
        let verifier = PaymentSignatureVerifier::new(SharedSecret::new(key));
        let signature = verifier.expected_signature(&order, &payment).unwrap();

        let result = verifier.verify(PaymentConfirmationFields::new(&order, &payment, signature));

        prop_assert!(result.is_ok());
    }

    #[test]
    fn single_character_change_alters_signature(
        order in reference(),
        payment in reference(),
        key in secret(),
        index in any::<usize>(),
    ) {
        let secret = SharedSecret::new(key.clone());
        let original = compute_signature(&secret, &order, &payment).unwrap();

        let changed_order = compute_signature(&secret, &mutate(&order, index), &payment).unwrap();
        let changed_payment = compute_signature(&secret, &order, &mutate(&payment, index)).unwrap();
        let changed_secret =
            compute_signature(&SharedSecret::new(mutate(&key, index)), &order, &payment).unwrap();

        prop_assert_ne!(&original, &changed_order);
        prop_assert_ne!(&original, &changed_payment);
        prop_assert_ne!(&original, &changed_secret);
    }

    #[test]
    fn any_missing_field_is_missing_fields(
        order in proptest::option::of(reference()),
        payment in proptest::option::of(reference()),
        signature in proptest::option::of("[0-9a-f]{64}"),
    ) {
        prop_assume!(order.is_none() || payment.is_none() || signature.is_none());
        let verifier = PaymentSignatureVerifier::new(SharedSecret::new("testsecret"));

        let result = verifier.verify(PaymentConfirmationFields {
            order_reference: order,
            payment_reference: payment,
            supplied_signature: signature,
        });

        prop_assert_eq!(result, Err(VerificationError::MissingFields));
    }

    #[test]
    fn arbitrary_signature_is_rejected(
        order in reference(),
        payment in reference(),
        signature in "[0-9a-f]{0,70}",
    ) {
        let verifier = PaymentSignatureVerifier::new(SharedSecret::new("testsecret"));
        let expected = verifier.expected_signature(&order, &payment).unwrap();
        prop_assume!(signature != expected && !signature.is_empty());

        let result = verifier.verify(PaymentConfirmationFields::new(&order, &payment, signature));

        prop_assert_eq!(result, Err(VerificationError::InvalidSignature));
    }
}
