//! Selection validation: odds bounds and duplicate detection.
//!
//! The whole selection sequence is validated in one upfront pass, before
//! any persistence; the first offending selection in request order wins.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::money;

/// One leg of a bet request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectionInput {
    pub id: i64,
    pub odds: Decimal,
}

/// First failing selection of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionError {
    pub selection_id: i64,
    pub message: String,
}

const MIN_ODDS: Decimal = Decimal::ONE;

fn max_odds() -> Decimal {
    Decimal::from(10_000)
}

/// Validate a full selection sequence.
///
/// Checks, per selection and in request order:
/// - odds within [1, 10000]
/// - odds representable in thousandths
/// - selection id not already used in this request
pub fn validate_selections(selections: &[SelectionInput]) -> Result<(), SelectionError> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(selections.len());

    for selection in selections {
        if selection.odds < MIN_ODDS || selection.odds > max_odds() {
            return Err(SelectionError {
                selection_id: selection.id,
                message: "odds must be between 1 and 10000".to_string(),
            });
        }
        if money::to_milli_odds(selection.odds).is_err() {
            return Err(SelectionError {
                selection_id: selection.id,
                message: "odds must have at most 3 decimal places".to_string(),
            });
        }
        if !seen.insert(selection.id) {
            return Err(SelectionError {
                selection_id: selection.id,
                message: "Duplicate selection found".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use super::{validate_selections, SelectionInput};

    fn sel(id: i64, odds: rust_decimal::Decimal) -> SelectionInput {
        SelectionInput { id, odds }
    }

    #[test]
    fn accepts_valid_sequence() {
        let selections = vec![sel(1, dec!(2.0)), sel(2, dec!(3.0))];
        assert!(validate_selections(&selections).is_ok());
    }

    #[test]
    fn accepts_boundary_odds() {
        let selections = vec![sel(1, dec!(1)), sel(2, dec!(10000))];
        assert!(validate_selections(&selections).is_ok());
    }

    #[test]
    fn rejects_odds_below_one() {
        let err = validate_selections(&[sel(5, dec!(0.99))]).unwrap_err();
        assert_eq!(err.selection_id, 5);
        assert_eq!(err.message, "odds must be between 1 and 10000");
    }

    #[test]
    fn rejects_odds_above_ten_thousand() {
        let err = validate_selections(&[sel(7, dec!(10000.01))]).unwrap_err();
        assert_eq!(err.selection_id, 7);
    }

    #[test]
    fn rejects_excess_odds_precision() {
        let err = validate_selections(&[sel(2, dec!(2.0005))]).unwrap_err();
        assert_eq!(err.message, "odds must have at most 3 decimal places");
    }

    #[test]
    fn duplicate_reports_the_duplicated_id() {
        let selections = vec![sel(1, dec!(2)), sel(2, dec!(3)), sel(1, dec!(4))];
        let err = validate_selections(&selections).unwrap_err();
        assert_eq!(err.selection_id, 1);
        assert_eq!(err.message, "Duplicate selection found");
    }

    #[test]
    fn first_offender_in_request_order_wins() {
        // Out-of-range odds at index 1 beat the duplicate at index 2.
        let selections = vec![sel(1, dec!(2)), sel(2, dec!(0.5)), sel(1, dec!(3))];
        let err = validate_selections(&selections).unwrap_err();
        assert_eq!(err.selection_id, 2);
        assert_eq!(err.message, "odds must be between 1 and 10000");
    }

    proptest! {
        #[test]
        fn unique_ids_with_valid_odds_always_pass(
            ids in proptest::collection::hash_set(0i64..1000, 0..20),
            odds_milli in 1000i64..=10_000_000,
        ) {
            let odds = rust_decimal::Decimal::new(odds_milli, 3);
            let selections: Vec<_> = ids.iter().map(|&id| sel(id, odds)).collect();
            prop_assert!(validate_selections(&selections).is_ok());
        }

        #[test]
        fn any_repeated_id_always_fails(
            id in 0i64..1000,
            filler in proptest::collection::vec(1000i64..2000, 0..10),
        ) {
            let mut selections: Vec<_> =
                filler.iter().map(|&f| sel(f, dec!(2))).collect();
            selections.push(sel(id, dec!(2)));
            selections.push(sel(id, dec!(2)));
            // filler ids may repeat among themselves; the sequence still
            // must be rejected since at least one id occurs twice.
            prop_assert!(validate_selections(&selections).is_err());
        }
    }
}
