//! Shared result type for keyed-hash webhook verification.
//!
//! Click and Octo both authenticate webhooks the same way: the provider
//! concatenates an ordered set of fields with the merchant's secret, hashes
//! the result, and sends the hex digest alongside the payload. Verification
//! recomputes the digest and compares. [`SignatureCheck`] carries both
//! digests so a rejected webhook can be audited, not just dropped.
//!
//! Payme authenticates with Basic Auth instead; its result type lives in
//! [`crate::payme`].

use serde::Serialize;

/// Outcome of recomputing and comparing a webhook signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureCheck {
    /// Whether the received signature matched the recomputed one.
    pub valid: bool,
    /// The digest this crate computed from the signed fields and secret.
    pub expected_signature: String,
    /// The digest the webhook carried.
    pub received_signature: String,
    /// Human-readable verdict for logs and dispatcher responses.
    pub message: String,
}

impl SignatureCheck {
    /// Compares an expected digest against the received one.
    ///
    /// Equality is exact and case-sensitive: provider digests are lowercase
    /// hex, and an uppercase copy of the right digest is still a mismatch.
    pub(crate) fn compare(
        expected: String,
        received: &str,
        on_valid: &str,
        on_invalid: &str,
    ) -> Self {
        let valid = expected == received;
        Self {
            valid,
            expected_signature: expected,
            received_signature: received.to_owned(),
            message: if valid { on_valid } else { on_invalid }.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_digests_are_valid() {
        let check = SignatureCheck::compare("abc123".to_owned(), "abc123", "ok", "bad");
        assert!(check.valid);
        assert_eq!(check.message, "ok");
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let check = SignatureCheck::compare("abc123".to_owned(), "ABC123", "ok", "bad");
        assert!(!check.valid);
        assert_eq!(check.message, "bad");
    }

    #[test]
    fn test_both_digests_are_reported() {
        let check = SignatureCheck::compare("aa".to_owned(), "bb", "ok", "bad");
        assert_eq!(check.expected_signature, "aa");
        assert_eq!(check.received_signature, "bb");
    }
}
