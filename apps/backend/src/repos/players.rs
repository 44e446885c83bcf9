//! Player repository functions for the domain layer.

use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;

use crate::adapters::players_sea;
use crate::domain::money;
use crate::entities::players;
use crate::errors::domain::DomainError;

/// Player domain model.
///
/// Balance is a decimal amount; the cents representation stays behind
/// the adapter boundary. `lock_version` feeds the optimistic debit.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub display_name: String,
    pub balance: Decimal,
    pub lock_version: i32,
}

impl From<players::Model> for Player {
    fn from(m: players::Model) -> Self {
        Self {
            id: m.id,
            display_name: m.display_name,
            balance: money::from_cents(m.balance_cents),
            lock_version: m.lock_version,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let player = players_sea::find_by_id(conn, player_id)
        .await
        .map_err(crate::infra::db_errors::map_db_err)?;
    Ok(player.map(Player::from))
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    display_name: impl Into<String>,
    balance: Decimal,
) -> Result<Player, DomainError> {
    let dto = players_sea::PlayerCreate {
        display_name: display_name.into(),
        balance_cents: money::to_cents(balance)?,
    };
    let player = players_sea::create_player(conn, dto)
        .await
        .map_err(crate::infra::db_errors::map_db_err)?;
    Ok(Player::from(player))
}

/// Debit `amount` from the player's balance, guarded by `expected_lock_version`.
///
/// Fails with an optimistic-lock conflict when the version moved, and
/// with `NotFound` when the player no longer exists.
pub async fn debit_balance<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    amount: Decimal,
    expected_lock_version: i32,
) -> Result<Player, DomainError> {
    let amount_cents = money::to_cents(amount)?;
    let player =
        players_sea::debit_balance(conn, player_id, amount_cents, expected_lock_version)
            .await
            .map_err(crate::infra::db_errors::map_db_err)?;
    Ok(Player::from(player))
}
