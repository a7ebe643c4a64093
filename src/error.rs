//! Input validation errors for checkout and payment builders.
//!
//! Only the builder functions are fallible. Webhook verification recovers
//! every failure locally and reports it through the result value instead
//! (see [`crate::webhook`]).

use rust_decimal::Decimal;

/// Rejected input to a checkout/invoice/payment builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    /// A required identifier was empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// The payment amount was zero or negative.
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount in major units.
        amount: Decimal,
    },

    /// The payment amount does not fit the provider's minor-unit field.
    #[error("amount {amount} is out of range for minor-unit conversion")]
    AmountOutOfRange {
        /// The rejected amount in major units.
        amount: Decimal,
    },
}

/// Returns [`CheckoutError::EmptyField`] when `value` is empty.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), CheckoutError> {
    if value.is_empty() {
        return Err(CheckoutError::EmptyField { field });
    }
    Ok(())
}

/// Failure while decoding a webhook credential token.
///
/// Never escapes the crate's public API as an `Err`; verification folds it
/// into an invalid result with a reason message.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The token was not valid base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes were not valid UTF-8.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
