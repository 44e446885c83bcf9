//! Bet placement orchestration.
//!
//! `place_bet` runs inside a transaction owned by the caller (the route
//! wraps it in `with_txn`), so every rejection or failure on any step
//! rolls back bet, selections and debit together.

use rust_decimal::Decimal;
use sea_orm::DatabaseTransaction;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{money, odds};
use crate::domain::selections::{validate_selections, SelectionInput};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::errors::{ErrorCode, PlacementError};
use crate::repos::{bets as bets_repo, players as players_repo};
use crate::state::wager_config::WagerConfig;

/// Attempts to re-debit after an optimistic-lock conflict before giving up.
const DEBIT_RETRY_LIMIT: u32 = 3;

/// Incoming bet placement request.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceBetRequest {
    pub player_id: i64,
    pub stake_amount: Decimal,
    pub selections: Vec<SelectionInput>,
}

/// Outcome of an accepted placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBet {
    pub bet_id: i64,
    pub max_win: Decimal,
    pub balance_after: Decimal,
}

/// Bet placement service.
pub struct BetService;

impl BetService {
    pub fn new() -> Self {
        Self
    }

    /// Place a bet for a player.
    ///
    /// Order of checks: request shape, balance, selection validation,
    /// win limit. Balance is checked first so an underfunded request is
    /// rejected as such even when its selections are malformed; selection
    /// validation precedes the win-limit check so out-of-range odds
    /// surface as selection errors rather than inflating the computed win.
    pub async fn place_bet(
        &self,
        txn: &DatabaseTransaction,
        config: &WagerConfig,
        request: &PlaceBetRequest,
    ) -> Result<PlacedBet, PlacementError> {
        if request.stake_amount < Decimal::ZERO {
            return Err(AppError::bad_request(
                ErrorCode::InvalidStake,
                "stake_amount must not be negative".to_string(),
            )
            .into());
        }
        if money::to_cents(request.stake_amount).is_err() {
            return Err(AppError::bad_request(
                ErrorCode::InvalidStake,
                "stake_amount must have at most 2 decimal places".to_string(),
            )
            .into());
        }
        if request.selections.is_empty() {
            return Err(AppError::bad_request(
                ErrorCode::BadRequest,
                "selections must not be empty".to_string(),
            )
            .into());
        }

        let player = players_repo::find_by_id(txn, request.player_id)
            .await?
            .ok_or(PlacementError::PlayerNotFound {
                player_id: request.player_id,
            })?;

        if player.balance < request.stake_amount {
            warn!(
                player_id = player.id,
                "bet rejected: stake exceeds balance"
            );
            return Err(PlacementError::InsufficientBalance {
                balance: player.balance,
                stake: request.stake_amount,
            });
        }

        // Single upfront pass over the whole selection sequence.
        if let Err(e) = validate_selections(&request.selections) {
            return Err(PlacementError::Selection {
                selection_id: e.selection_id,
                message: e.message,
            });
        }

        let max_win = odds::max_win(
            request.stake_amount,
            request.selections.iter().map(|s| s.odds),
        );
        if max_win > config.max_win_amount {
            warn!(
                player_id = player.id,
                %max_win,
                limit = %config.max_win_amount,
                "bet rejected: win limit exceeded"
            );
            return Err(PlacementError::WinLimitExceeded {
                max_win,
                limit: config.max_win_amount,
            });
        }

        let bet = bets_repo::create_bet(txn, player.id, request.stake_amount).await?;
        for selection in &request.selections {
            bets_repo::add_selection(txn, bet.id, selection.id, selection.odds).await?;
        }

        let debited = self
            .debit_with_retry(txn, player, request.stake_amount)
            .await?;

        info!(
            bet_id = bet.id,
            player_id = debited.id,
            stake = %request.stake_amount,
            %max_win,
            "bet placed"
        );

        Ok(PlacedBet {
            bet_id: bet.id,
            max_win,
            balance_after: debited.balance,
        })
    }

    /// Debit the stake under optimistic versioning.
    ///
    /// On a lock conflict the player row is re-read and the balance
    /// re-checked before retrying, so two concurrent placements cannot
    /// both pass the balance check and overdraft the account.
    async fn debit_with_retry(
        &self,
        txn: &DatabaseTransaction,
        mut player: crate::repos::players::Player,
        stake: Decimal,
    ) -> Result<crate::repos::players::Player, PlacementError> {
        for attempt in 1..=DEBIT_RETRY_LIMIT {
            match players_repo::debit_balance(txn, player.id, stake, player.lock_version).await {
                Ok(updated) => return Ok(updated),
                Err(DomainError::Conflict(ConflictKind::OptimisticLock, _))
                    if attempt < DEBIT_RETRY_LIMIT =>
                {
                    warn!(player_id = player.id, attempt, "debit conflict, retrying");
                    player = players_repo::find_by_id(txn, player.id)
                        .await?
                        .ok_or(PlacementError::PlayerNotFound {
                            player_id: player.id,
                        })?;
                    if player.balance < stake {
                        return Err(PlacementError::InsufficientBalance {
                            balance: player.balance,
                            stake,
                        });
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DomainError::conflict(
            ConflictKind::OptimisticLock,
            "balance kept changing concurrently; giving up",
        )
        .into())
    }
}

impl Default for BetService {
    fn default() -> Self {
        Self::new()
    }
}
