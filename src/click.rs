//! Click adapter: query-string invoice URLs and keyed-MD5 webhook signatures.
//!
//! Click runs a two-phase flow: a *prepare* webhook (action `0`) before the
//! charge and a *complete* webhook (action `1`) after it. Both carry an MD5
//! `sign_string` over the request fields and the merchant's secret. This
//! module builds the invoice URL that starts the flow and recomputes the
//! signature for either webhook.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::amount::Amount;
use crate::codec;
use crate::environment::Environment;
use crate::error::{CheckoutError, require_non_empty};
use crate::webhook::SignatureCheck;

/// Invoice endpoint. Click serves sandbox and production from the same URL;
/// the environment only affects which merchant cabinet the service ID belongs to.
pub const PAY_ENDPOINT: &str = "https://my.click.uz/services/pay";

/// A generated Click invoice URL with its inputs echoed for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    /// URL to redirect the payer to.
    pub invoice_url: String,
    /// `"test"` or `"production"`.
    pub environment: &'static str,
    /// Amount in major units, as supplied.
    pub amount: Decimal,
    /// The merchant-side transaction identifier carried in the URL.
    pub transaction_param: String,
}

/// Builds a Click invoice URL.
///
/// Query parameters are serialized in a fixed insertion order —
/// `service_id`, `merchant_id`, `amount`, `transaction_param`, `return_url`,
/// then `merchant_user_id` only when supplied (an absent user ID produces no
/// empty placeholder). The order is part of this crate's contract so repeated
/// calls stay byte-identical. The amount renders through `Decimal`'s
/// `Display`, preserving the scale the caller supplied.
///
/// # Errors
///
/// [`CheckoutError`] when `service_id`, `merchant_id`, `transaction_param`,
/// or `return_url` is empty, or when the amount is not positive.
#[cfg_attr(feature = "telemetry", tracing::instrument(err))]
pub fn invoice_url(
    service_id: &str,
    merchant_id: &str,
    amount: Decimal,
    transaction_param: &str,
    return_url: &str,
    merchant_user_id: Option<&str>,
    env: Environment,
) -> Result<Invoice, CheckoutError> {
    require_non_empty("service_id", service_id)?;
    require_non_empty("merchant_id", merchant_id)?;
    require_non_empty("transaction_param", transaction_param)?;
    require_non_empty("return_url", return_url)?;
    let amount = Amount::new(amount)?;

    let mut params = vec![
        ("service_id", service_id.to_owned()),
        ("merchant_id", merchant_id.to_owned()),
        ("amount", amount.to_string()),
        ("transaction_param", transaction_param.to_owned()),
        ("return_url", return_url.to_owned()),
    ];
    if let Some(user_id) = merchant_user_id {
        params.push(("merchant_user_id", user_id.to_owned()));
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    Ok(Invoice {
        invoice_url: format!("{PAY_ENDPOINT}?{query}"),
        environment: env.label(),
        amount: amount.major_units(),
        transaction_param: transaction_param.to_owned(),
    })
}

/// The fields a Click webhook signs, in wire order.
///
/// `amount` is the exact text Click sent in the form body, not a parsed
/// number: the digest covers the provider's own rendering, and re-formatting
/// it (dropping a trailing zero, say) would break verification. Passing the
/// received text through verbatim is this crate's canonical stringification.
#[derive(Debug, Clone, Copy)]
pub struct SignedFields<'a> {
    /// Click's transaction identifier.
    pub click_trans_id: &'a str,
    /// The merchant's service identifier.
    pub service_id: &'a str,
    /// The merchant-side transaction identifier.
    pub merchant_trans_id: &'a str,
    /// The amount text exactly as received.
    pub amount: &'a str,
    /// `0` for prepare, `1` for complete.
    pub action: i64,
    /// The signature timestamp exactly as received.
    pub sign_time: &'a str,
}

/// Verifies the MD5 signature of an incoming Click webhook.
///
/// The canonical signature input is the concatenation, with no separators,
/// of: `click_trans_id`, `service_id`, `secret_key`, `merchant_trans_id`,
/// `amount`, `action` (plain decimal digits), `sign_time`. The MD5 digest of
/// those UTF-8 bytes, as lowercase hex, must equal `received_signature`
/// exactly (case-sensitive).
#[cfg_attr(feature = "telemetry", tracing::instrument(skip(secret_key)))]
#[must_use]
pub fn verify_webhook(
    fields: &SignedFields<'_>,
    secret_key: &str,
    received_signature: &str,
) -> SignatureCheck {
    let SignedFields {
        click_trans_id,
        service_id,
        merchant_trans_id,
        amount,
        action,
        sign_time,
    } = *fields;
    let sign_string = format!(
        "{click_trans_id}{service_id}{secret_key}{merchant_trans_id}{amount}{action}{sign_time}"
    );
    SignatureCheck::compare(
        codec::md5_hex(&sign_string),
        received_signature,
        "valid Click webhook signature",
        "signature mismatch; reject this webhook",
    )
}
