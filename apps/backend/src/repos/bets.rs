//! Bet repository functions for the domain layer.

use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;

use crate::adapters::bets_sea;
use crate::domain::money;
use crate::entities::{bet_selections, bets};
use crate::errors::domain::DomainError;

/// Bet domain model. Created once per accepted request; immutable
/// thereafter within the placement workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct Bet {
    pub id: i64,
    pub player_id: i64,
    pub stake_amount: Decimal,
    pub created_at: time::OffsetDateTime,
}

impl From<bets::Model> for Bet {
    fn from(m: bets::Model) -> Self {
        Self {
            id: m.id,
            player_id: m.player_id,
            stake_amount: money::from_cents(m.stake_cents),
            created_at: m.created_at,
        }
    }
}

/// One persisted selection of a bet.
#[derive(Debug, Clone, PartialEq)]
pub struct BetSelection {
    pub id: i64,
    pub bet_id: i64,
    pub selection_id: i64,
    pub odds: Decimal,
}

impl From<bet_selections::Model> for BetSelection {
    fn from(m: bet_selections::Model) -> Self {
        Self {
            id: m.id,
            bet_id: m.bet_id,
            selection_id: m.selection_id,
            odds: money::from_milli_odds(m.odds_milli),
        }
    }
}

pub async fn create_bet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    stake_amount: Decimal,
) -> Result<Bet, DomainError> {
    let dto = bets_sea::BetCreate {
        player_id,
        stake_cents: money::to_cents(stake_amount)?,
    };
    let bet = bets_sea::create_bet(conn, dto)
        .await
        .map_err(crate::infra::db_errors::map_db_err)?;
    Ok(Bet::from(bet))
}

pub async fn add_selection<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bet_id: i64,
    selection_id: i64,
    odds: Decimal,
) -> Result<BetSelection, DomainError> {
    let dto = bets_sea::SelectionCreate {
        bet_id,
        selection_id,
        odds_milli: money::to_milli_odds(odds)?,
    };
    let selection = bets_sea::add_selection(conn, dto)
        .await
        .map_err(crate::infra::db_errors::map_db_err)?;
    Ok(BetSelection::from(selection))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bet_id: i64,
) -> Result<Option<Bet>, DomainError> {
    let bet = bets_sea::find_by_id(conn, bet_id)
        .await
        .map_err(crate::infra::db_errors::map_db_err)?;
    Ok(bet.map(Bet::from))
}

pub async fn selections_for_bet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bet_id: i64,
) -> Result<Vec<BetSelection>, DomainError> {
    let selections = bets_sea::selections_for_bet(conn, bet_id)
        .await
        .map_err(crate::infra::db_errors::map_db_err)?;
    Ok(selections.into_iter().map(BetSelection::from).collect())
}
