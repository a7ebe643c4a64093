//! Payme adapter: base64-embedded checkout parameters and Basic Auth webhooks.
//!
//! Payme's checkout page takes its parameters as a single base64 path
//! segment. The merchant API itself is JSON-RPC (see
//! [`crate::guide::payme_integration`] for the method list); this module
//! covers the two pure pieces — building the checkout URL and checking the
//! Basic Auth header Payme sends with merchant-API webhooks.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::amount::Amount;
use crate::codec;
use crate::environment::Environment;
use crate::error::{CheckoutError, require_non_empty};

/// Live checkout page.
pub const PRODUCTION_CHECKOUT_URL: &str = "https://checkout.paycom.uz";
/// Sandbox checkout page; no real money movement.
pub const SANDBOX_CHECKOUT_URL: &str = "https://checkout.test.paycom.uz";

/// A generated Payme checkout URL with its inputs echoed for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkout {
    /// URL to redirect the payer to.
    pub payment_url: String,
    /// `"test"` or `"production"`.
    pub environment: &'static str,
    /// Amount in major units, as supplied.
    pub amount_uzs: Decimal,
    /// Amount in minor units (tiyin) as embedded in the URL.
    pub amount_tiyin: u64,
    /// The order identifier carried in the `ac.order_id` field.
    pub order_id: String,
    /// The base64 path segment, exposed for debugging round-trips.
    pub encoded_params: String,
}

/// Builds a Payme checkout URL.
///
/// The parameter string is byte-exact per Payme's wire contract, in this
/// field order with `;` delimiters:
///
/// ```text
/// m=<merchant_id>;ac.order_id=<order_id>;a=<tiyin>;c=<return_url>
/// ```
///
/// The UTF-8 bytes of that string are base64-encoded (standard alphabet,
/// padded) and appended to the environment's checkout base URL as a path
/// segment. The amount converts to tiyin under the rounding rule documented
/// on [`Amount::new`].
///
/// # Errors
///
/// [`CheckoutError`] when `merchant_id`, `order_id`, or `return_url` is
/// empty, or when the amount is not positive.
#[cfg_attr(feature = "telemetry", tracing::instrument(err))]
pub fn checkout_url(
    merchant_id: &str,
    amount: Decimal,
    order_id: &str,
    return_url: &str,
    env: Environment,
) -> Result<Checkout, CheckoutError> {
    require_non_empty("merchant_id", merchant_id)?;
    require_non_empty("order_id", order_id)?;
    require_non_empty("return_url", return_url)?;
    let amount = Amount::new(amount)?;

    let tiyin = amount.minor_units();
    let params = format!("m={merchant_id};ac.order_id={order_id};a={tiyin};c={return_url}");
    let encoded_params = codec::base64_encode(&params);

    let base = env.select(SANDBOX_CHECKOUT_URL, PRODUCTION_CHECKOUT_URL);
    Ok(Checkout {
        payment_url: format!("{base}/{encoded_params}"),
        environment: env.label(),
        amount_uzs: amount.major_units(),
        amount_tiyin: tiyin,
        order_id: order_id.to_owned(),
        encoded_params,
    })
}

/// Outcome of checking a Payme webhook's `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicAuthCheck {
    /// Whether the header carried the merchant key.
    pub valid: bool,
    /// The decoded credentials; present only on success, redacted otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<String>,
    /// Human-readable verdict.
    pub message: String,
}

impl BasicAuthCheck {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            decoded: None,
            message: message.into(),
        }
    }
}

/// Verifies the Basic Auth header of an incoming Payme webhook.
///
/// Payme sends `Authorization: Basic base64(merchant_id:merchant_key)`. The
/// check here is substring containment: the decoded credentials must contain
/// `merchant_key` anywhere, not specifically in the password position. That
/// looseness is the upstream-compatible behavior and is kept deliberately; a
/// key that happens to appear elsewhere in the decoded string also passes
/// (see the tests for the false-positive surface).
///
/// Every failure — wrong auth scheme, malformed base64, non-UTF-8 payload,
/// missing key — comes back as a [`BasicAuthCheck`] with `valid == false`;
/// this function never panics or returns an error.
#[cfg_attr(feature = "telemetry", tracing::instrument(skip(merchant_key)))]
#[must_use]
pub fn verify_webhook(authorization_header: &str, merchant_key: &str) -> BasicAuthCheck {
    let Some(token) = authorization_header.strip_prefix("Basic ") else {
        return BasicAuthCheck::rejected("authorization must use the Basic scheme");
    };
    match codec::base64_decode_utf8(token.trim()) {
        Ok(decoded) if decoded.contains(merchant_key) => BasicAuthCheck {
            valid: true,
            decoded: Some(decoded),
            message: "valid Payme webhook authentication".to_owned(),
        },
        Ok(_) => BasicAuthCheck::rejected("merchant key not present in credentials"),
        Err(err) => BasicAuthCheck::rejected(format!("credential decode failed: {err}")),
    }
}
