//! SeaORM adapter for player accounts.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::players;

/// DTO for creating a player account.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub display_name: String,
    pub balance_cents: i64,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Id.eq(player_id))
        .one(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let player = players::ActiveModel {
        id: NotSet,
        display_name: Set(dto.display_name),
        balance_cents: Set(dto.balance_cents),
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };
    player.insert(conn).await
}

/// Debit a player's balance with an optimistic lock version check.
///
/// The decrement, `updated_at` touch and version bump are a single
/// conditional UPDATE filtered on id + current lock_version. Zero rows
/// affected means either the player vanished (`PLAYER_NOT_FOUND`
/// payload) or a concurrent writer got there first (`OPTIMISTIC_LOCK`
/// payload with expected/actual versions). Returns the refetched row.
pub async fn debit_balance<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    amount_cents: i64,
    expected_lock_version: i32,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let result = players::Entity::update_many()
        .col_expr(
            players::Column::BalanceCents,
            Expr::col(players::Column::BalanceCents).sub(amount_cents),
        )
        .col_expr(players::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            players::Column::LockVersion,
            Expr::col(players::Column::LockVersion).add(1),
        )
        .filter(players::Column::Id.eq(player_id))
        .filter(players::Column::LockVersion.eq(expected_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        let player = players::Entity::find_by_id(player_id).one(conn).await?;
        return match player {
            Some(player) => {
                let payload = format!(
                    "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                    expected_lock_version, player.lock_version
                );
                Err(sea_orm::DbErr::Custom(payload))
            }
            None => Err(sea_orm::DbErr::Custom(format!(
                "PLAYER_NOT_FOUND:{player_id}"
            ))),
        };
    }

    players::Entity::find_by_id(player_id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Player not found".to_string()))
}
