//! Process-wide wagering limits, injected at state construction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::AppError;

const DEFAULT_MAX_WIN_AMOUNT: Decimal = dec!(20000);

/// Wagering configuration.
///
/// The win limit is deployment-tunable rather than a hardcoded constant;
/// it caps the maximum payout any single bet may reach.
#[derive(Debug, Clone, PartialEq)]
pub struct WagerConfig {
    pub max_win_amount: Decimal,
}

impl WagerConfig {
    pub fn new(max_win_amount: Decimal) -> Self {
        Self { max_win_amount }
    }

    /// Read the configuration from the environment.
    ///
    /// `WAGER_MAX_WIN_AMOUNT` overrides the default limit of 20000.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var("WAGER_MAX_WIN_AMOUNT") {
            Ok(raw) => {
                let limit = raw.parse::<Decimal>().map_err(|_| {
                    AppError::config(format!("WAGER_MAX_WIN_AMOUNT is not a valid amount: '{raw}'"))
                })?;
                if limit <= Decimal::ZERO {
                    return Err(AppError::config(
                        "WAGER_MAX_WIN_AMOUNT must be positive".to_string(),
                    ));
                }
                Ok(Self::new(limit))
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

impl Default for WagerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIN_AMOUNT)
    }
}
