//! Octo adapter: signed payment-init payloads and keyed-SHA-256 webhooks.
//!
//! Octo is a plain REST API. Payment initiation is a POST of a signed JSON
//! body; this module computes the signature and returns the exact body and
//! endpoint an external HTTP client must use — it never performs the POST
//! itself. Webhooks carry a SHA-256 signature over the payment UUID, the
//! status, and the merchant's secret.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::amount::Amount;
use crate::codec;
use crate::environment::Environment;
use crate::error::{CheckoutError, require_non_empty};
use crate::webhook::SignatureCheck;

/// Live payment-init endpoint.
pub const PRODUCTION_INIT_URL: &str = "https://api.octo.uz/v1/payment/init";
/// Sandbox payment-init endpoint.
pub const SANDBOX_INIT_URL: &str = "https://api.test.octo.uz/v1/payment/init";

/// Inputs for a payment initiation, minus the secret.
///
/// Defaults applied by [`PaymentParams::new`]: `auto_capture = true`,
/// `currency = "UZS"`. Override with the `with_*` builders.
#[derive(Debug, Clone, Copy)]
pub struct PaymentParams<'a> {
    /// The merchant's public API key; travels in the payload.
    pub api_key: &'a str,
    /// Amount in major units.
    pub amount: Decimal,
    /// The merchant's unique transaction identifier.
    pub transaction_id: &'a str,
    /// URL to redirect the payer to after payment.
    pub return_url: &'a str,
    /// Capture the payment automatically once authorized.
    pub auto_capture: bool,
    /// ISO currency code; part of the signature input.
    pub currency: &'a str,
}

impl<'a> PaymentParams<'a> {
    /// Creates payment parameters with the default capture mode and currency.
    #[must_use]
    pub const fn new(
        api_key: &'a str,
        amount: Decimal,
        transaction_id: &'a str,
        return_url: &'a str,
    ) -> Self {
        Self {
            api_key,
            amount,
            transaction_id,
            return_url,
            auto_capture: true,
            currency: "UZS",
        }
    }

    /// Sets the capture mode.
    #[must_use]
    pub const fn with_auto_capture(mut self, auto_capture: bool) -> Self {
        self.auto_capture = auto_capture;
        self
    }

    /// Sets the currency code.
    #[must_use]
    pub const fn with_currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }
}

/// The JSON body to POST to the payment-init endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRequest {
    /// The merchant's public API key.
    pub api_key: String,
    /// Amount in major units (serialized as a decimal string).
    pub amount: Decimal,
    /// ISO currency code.
    pub currency: String,
    /// The merchant's transaction identifier.
    pub transaction_id: String,
    /// Post-payment redirect URL.
    pub return_url: String,
    /// Capture mode.
    pub auto_capture: bool,
    /// SHA-256 request signature, lowercase hex.
    pub signature: String,
}

/// A prepared payment initiation: where to POST and what to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentInit {
    /// The environment's payment-init endpoint.
    pub api_endpoint: &'static str,
    /// `"test"` or `"production"`.
    pub environment: &'static str,
    /// The signed request body.
    pub payment_data: PaymentRequest,
}

/// Prepares an Octo payment initiation.
///
/// The request signature is the SHA-256 lowercase-hex digest of the
/// concatenation, with no separators, of: `transaction_id`, the amount
/// rendered through `Decimal`'s `Display` (preserving the supplied scale),
/// `currency`, `secret_key`.
///
/// # Errors
///
/// [`CheckoutError`] when `api_key`, `transaction_id`, `return_url`, or
/// `currency` is empty, or when the amount is not positive.
#[cfg_attr(feature = "telemetry", tracing::instrument(skip(secret_key), err))]
pub fn create_payment(
    params: &PaymentParams<'_>,
    secret_key: &str,
    env: Environment,
) -> Result<PaymentInit, CheckoutError> {
    require_non_empty("api_key", params.api_key)?;
    require_non_empty("transaction_id", params.transaction_id)?;
    require_non_empty("return_url", params.return_url)?;
    require_non_empty("currency", params.currency)?;
    let amount = Amount::new(params.amount)?;

    let sign_string = format!(
        "{}{}{}{}",
        params.transaction_id, amount, params.currency, secret_key
    );
    let signature = codec::sha256_hex(&sign_string);

    Ok(PaymentInit {
        api_endpoint: env.select(SANDBOX_INIT_URL, PRODUCTION_INIT_URL),
        environment: env.label(),
        payment_data: PaymentRequest {
            api_key: params.api_key.to_owned(),
            amount: amount.major_units(),
            currency: params.currency.to_owned(),
            transaction_id: params.transaction_id.to_owned(),
            return_url: params.return_url.to_owned(),
            auto_capture: params.auto_capture,
            signature,
        },
    })
}

/// Verifies the SHA-256 signature of an incoming Octo webhook.
///
/// The canonical signature input is the concatenation, with no separators,
/// of: `payment_uuid`, `status`, `secret_key`. The lowercase-hex digest must
/// equal `received_signature` exactly (case-sensitive).
#[cfg_attr(feature = "telemetry", tracing::instrument(skip(secret_key)))]
#[must_use]
pub fn verify_webhook(
    payment_uuid: &str,
    status: &str,
    received_signature: &str,
    secret_key: &str,
) -> SignatureCheck {
    let sign_string = format!("{payment_uuid}{status}{secret_key}");
    SignatureCheck::compare(
        codec::sha256_hex(&sign_string),
        received_signature,
        "valid Octo webhook signature",
        "signature mismatch; reject this webhook",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_create_payment_known_signature() {
        // SHA-256("tx-9125000.50UZSoctokey")
        let params = PaymentParams::new("pub-key", dec("125000.50"), "tx-9", "https://a.example/r");
        let init = create_payment(&params, "octokey", Environment::Sandbox).unwrap();

        assert_eq!(
            init.payment_data.signature,
            "ad71802047b17830ae55a79fe5eb98a1e4c158fb85c612b8d9bcd61bc920f1e3"
        );
        assert_eq!(init.api_endpoint, SANDBOX_INIT_URL);
        assert_eq!(init.environment, "test");
    }

    #[test]
    fn test_create_payment_defaults() {
        let params = PaymentParams::new("k", dec("10"), "t1", "https://a.example");
        let init = create_payment(&params, "s", Environment::Production).unwrap();
        assert!(init.payment_data.auto_capture);
        assert_eq!(init.payment_data.currency, "UZS");
        assert_eq!(init.api_endpoint, PRODUCTION_INIT_URL);
    }

    #[test]
    fn test_create_payment_builder_overrides() {
        let params = PaymentParams::new("k", dec("10"), "t1", "https://a.example")
            .with_auto_capture(false)
            .with_currency("USD");
        let init = create_payment(&params, "s", Environment::Sandbox).unwrap();
        assert!(!init.payment_data.auto_capture);
        assert_eq!(init.payment_data.currency, "USD");
    }

    #[test]
    fn test_payload_serializes_all_wire_fields() {
        let params = PaymentParams::new("pub-key", dec("10.00"), "t1", "https://a.example");
        let init = create_payment(&params, "s", Environment::Sandbox).unwrap();
        let json = serde_json::to_value(&init.payment_data).unwrap();

        assert_eq!(json["api_key"], "pub-key");
        assert_eq!(json["amount"], "10.00");
        assert_eq!(json["currency"], "UZS");
        assert_eq!(json["transaction_id"], "t1");
        assert_eq!(json["auto_capture"], true);
        assert_eq!(
            json["signature"].as_str().unwrap(),
            init.payment_data.signature
        );
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let params = PaymentParams::new("", dec("10"), "t1", "https://a.example");
        let err = create_payment(&params, "s", Environment::Sandbox).unwrap_err();
        assert_eq!(err, CheckoutError::EmptyField { field: "api_key" });
    }

    #[test]
    fn test_zero_amount_rejected() {
        let params = PaymentParams::new("k", Decimal::ZERO, "t1", "https://a.example");
        let err = create_payment(&params, "s", Environment::Sandbox).unwrap_err();
        assert!(matches!(err, CheckoutError::NonPositiveAmount { .. }));
    }

    #[test]
    fn test_verify_known_vector() {
        // SHA-256("uuid-1succeededk")
        let good = "90186e48e54c2c3a8557466694ea979dca164bdc3f98702106b74d3a2a17b505";
        let check = verify_webhook("uuid-1", "succeeded", good, "k");
        assert!(check.valid);
    }

    #[test]
    fn test_flipped_character_rejected() {
        let flipped = "80186e48e54c2c3a8557466694ea979dca164bdc3f98702106b74d3a2a17b505";
        let check = verify_webhook("uuid-1", "succeeded", flipped, "k");
        assert!(!check.valid);
    }

    #[test]
    fn test_verify_symmetry_with_computed_digest() {
        let expected = verify_webhook("u", "failed", "", "s").expected_signature;
        assert!(verify_webhook("u", "failed", &expected, "s").valid);
    }

    #[test]
    fn test_each_field_feeds_the_digest() {
        let base = verify_webhook("u", "succeeded", "", "s").expected_signature;
        assert_ne!(verify_webhook("v", "succeeded", "", "s").expected_signature, base);
        assert_ne!(verify_webhook("u", "cancelled", "", "s").expected_signature, base);
        assert_ne!(verify_webhook("u", "succeeded", "", "t").expected_signature, base);
    }
}
