//! Conversions between wire decimals and the scaled-integer storage
//! representation (amounts in cents, odds in thousandths).
//!
//! The database never sees a fractional value; excess precision is
//! rejected at the boundary instead of being silently rounded.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::errors::domain::DomainError;

/// Convert a monetary amount to integer cents.
///
/// Fails if the amount carries more than 2 decimal places or does not
/// fit in an i64.
pub fn to_cents(amount: Decimal) -> Result<i64, DomainError> {
    scale_to_int(amount, 2, "amount")
}

/// Convert integer cents back to a decimal amount.
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Convert odds to integer thousandths.
///
/// Fails if the odds carry more than 3 decimal places.
pub fn to_milli_odds(odds: Decimal) -> Result<i64, DomainError> {
    scale_to_int(odds, 3, "odds")
}

/// Convert integer thousandths back to decimal odds.
pub fn from_milli_odds(milli: i64) -> Decimal {
    Decimal::new(milli, 3)
}

fn scale_to_int(value: Decimal, scale: u32, what: &str) -> Result<i64, DomainError> {
    let factor = Decimal::from(10_i64.pow(scale));
    let scaled = value
        .checked_mul(factor)
        .ok_or_else(|| DomainError::validation(format!("{what} out of range")))?
        .normalize();
    if scaled.scale() != 0 {
        return Err(DomainError::validation(format!(
            "{what} must have at most {scale} decimal places"
        )));
    }
    scaled
        .to_i64()
        .ok_or_else(|| DomainError::validation(format!("{what} out of range")))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{from_cents, from_milli_odds, to_cents, to_milli_odds};

    #[test]
    fn cents_round_trip() {
        assert_eq!(to_cents(dec!(10)).unwrap(), 1000);
        assert_eq!(to_cents(dec!(0.05)).unwrap(), 5);
        assert_eq!(from_cents(1000), dec!(10.00));
    }

    #[test]
    fn cents_reject_sub_cent_precision() {
        assert!(to_cents(dec!(10.005)).is_err());
    }

    #[test]
    fn milli_odds_round_trip() {
        assert_eq!(to_milli_odds(dec!(2.5)).unwrap(), 2500);
        assert_eq!(to_milli_odds(dec!(1.001)).unwrap(), 1001);
        assert_eq!(from_milli_odds(2500), dec!(2.500));
    }

    #[test]
    fn milli_odds_reject_excess_precision() {
        assert!(to_milli_odds(dec!(2.0001)).is_err());
    }

    #[test]
    fn trailing_zeroes_are_not_excess_precision() {
        assert_eq!(to_cents(dec!(10.00)).unwrap(), 1000);
        assert_eq!(to_milli_odds(dec!(3.000)).unwrap(), 3000);
    }
}
