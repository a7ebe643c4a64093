//! Validated payment amounts.
//!
//! Providers quote amounts in major currency units (UZS) but Payme's wire
//! format carries minor units (tiyin, 1 UZS = 100 tiyin). [`Amount`] holds a
//! positive decimal and the tiyin value derived from it, so every adapter
//! shares one validation and one rounding rule.
//!
//! Amounts are [`rust_decimal::Decimal`], not floats: a `Decimal` keeps the
//! scale it was given, so `50000.00` renders back as `"50000.00"`. That
//! rendering is the canonical stringification used in invoice URLs and
//! signature inputs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::error::CheckoutError;

/// A positive payment amount in major currency units.
///
/// Construction validates the amount; once built, the minor-unit value is
/// always available without a further failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    major: Decimal,
    minor: u64,
}

impl Amount {
    /// Validates `value` and derives its minor-unit representation.
    ///
    /// The tiyin value is `value * 100` rounded **half away from zero** to an
    /// integer. The rounding rule is part of this crate's contract: fractional
    /// tiyin are impossible on the wire, and one fixed rule keeps repeated
    /// calls byte-identical (`50000.005` UZS is always `5000001` tiyin).
    ///
    /// # Errors
    ///
    /// [`CheckoutError::NonPositiveAmount`] when `value <= 0`;
    /// [`CheckoutError::AmountOutOfRange`] when the tiyin value does not fit
    /// an unsigned 64-bit integer.
    pub fn new(value: Decimal) -> Result<Self, CheckoutError> {
        if value <= Decimal::ZERO {
            return Err(CheckoutError::NonPositiveAmount { amount: value });
        }
        let minor = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|t| t.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|t| t.to_u64())
            .ok_or(CheckoutError::AmountOutOfRange { amount: value })?;
        Ok(Self {
            major: value,
            minor,
        })
    }

    /// The amount in major units, with the scale it was supplied in.
    #[must_use]
    pub const fn major_units(&self) -> Decimal {
        self.major
    }

    /// The amount in minor units (tiyin).
    #[must_use]
    pub const fn minor_units(&self) -> u64 {
        self.minor
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CheckoutError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_whole_amount_to_tiyin() {
        let amount = Amount::new(dec("50000.00")).unwrap();
        assert_eq!(amount.minor_units(), 5_000_000);
    }

    #[test]
    fn test_display_preserves_scale() {
        let amount = Amount::new(dec("50000.00")).unwrap();
        assert_eq!(amount.to_string(), "50000.00");
        let amount = Amount::new(dec("1000")).unwrap();
        assert_eq!(amount.to_string(), "1000");
    }

    #[test]
    fn test_fractional_tiyin_rounds_half_away_from_zero() {
        let amount = Amount::new(dec("50000.005")).unwrap();
        assert_eq!(amount.minor_units(), 5_000_001);
        let amount = Amount::new(dec("50000.004")).unwrap();
        assert_eq!(amount.minor_units(), 5_000_000);
    }

    #[test]
    fn test_zero_rejected() {
        let err = Amount::new(Decimal::ZERO).unwrap_err();
        assert!(matches!(err, CheckoutError::NonPositiveAmount { .. }));
    }

    #[test]
    fn test_negative_rejected() {
        let err = Amount::new(dec("-1")).unwrap_err();
        assert!(matches!(err, CheckoutError::NonPositiveAmount { .. }));
    }

    #[test]
    fn test_tiyin_overflow_rejected() {
        // u64::MAX tiyin is ~1.8e17 UZS.
        let err = Amount::new(dec("200000000000000000000")).unwrap_err();
        assert!(matches!(err, CheckoutError::AmountOutOfRange { .. }));
    }

    #[test]
    fn test_try_from_decimal() {
        let amount = Amount::try_from(dec("1500.50")).unwrap();
        assert_eq!(amount.minor_units(), 150_050);
        assert!(Amount::try_from(Decimal::ZERO).is_err());
    }
}
