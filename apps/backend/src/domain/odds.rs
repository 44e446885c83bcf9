//! Maximum-win calculation for accumulator bets.

use rust_decimal::Decimal;

/// Compute the maximum win for a stake and a set of selection odds.
///
/// Accumulator semantics: the stake rides every selection, so the
/// potential payout is `stake * product(odds)`. Saturates to
/// `Decimal::MAX` on overflow, which any finite win limit rejects.
pub fn max_win<I>(stake: Decimal, odds: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    let mut combined = Decimal::ONE;
    for o in odds {
        combined = match combined.checked_mul(o) {
            Some(v) => v,
            None => return Decimal::MAX,
        };
    }
    stake.checked_mul(combined).unwrap_or(Decimal::MAX)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::max_win;
    use rust_decimal::Decimal;

    #[test]
    fn single_selection_multiplies_stake() {
        assert_eq!(max_win(dec!(10), [dec!(2.5)]), dec!(25));
    }

    #[test]
    fn accumulator_multiplies_all_odds() {
        // The reference scenario: stake 10 at 2.0 and 3.0 pays 60 at most.
        assert_eq!(max_win(dec!(10), [dec!(2.0), dec!(3.0)]), dec!(60));
    }

    #[test]
    fn no_selections_means_stake_back() {
        assert_eq!(max_win(dec!(10), []), dec!(10));
    }

    #[test]
    fn overflow_saturates() {
        let odds = vec![dec!(10000); 10];
        assert_eq!(max_win(dec!(100), odds), Decimal::MAX);
    }
}
