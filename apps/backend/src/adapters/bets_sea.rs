//! SeaORM adapter for bets and their selections.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{bet_selections, bets};

/// DTO for creating a bet.
#[derive(Debug, Clone)]
pub struct BetCreate {
    pub player_id: i64,
    pub stake_cents: i64,
}

/// DTO for attaching a selection to a bet.
#[derive(Debug, Clone)]
pub struct SelectionCreate {
    pub bet_id: i64,
    pub selection_id: i64,
    pub odds_milli: i64,
}

pub async fn create_bet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BetCreate,
) -> Result<bets::Model, sea_orm::DbErr> {
    let bet = bets::ActiveModel {
        id: NotSet,
        player_id: Set(dto.player_id),
        stake_cents: Set(dto.stake_cents),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    bet.insert(conn).await
}

pub async fn add_selection<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SelectionCreate,
) -> Result<bet_selections::Model, sea_orm::DbErr> {
    let selection = bet_selections::ActiveModel {
        id: NotSet,
        bet_id: Set(dto.bet_id),
        selection_id: Set(dto.selection_id),
        odds_milli: Set(dto.odds_milli),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    selection.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bet_id: i64,
) -> Result<Option<bets::Model>, sea_orm::DbErr> {
    bets::Entity::find()
        .filter(bets::Column::Id.eq(bet_id))
        .one(conn)
        .await
}

/// Selections of a bet in insertion order.
pub async fn selections_for_bet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bet_id: i64,
) -> Result<Vec<bet_selections::Model>, sea_orm::DbErr> {
    bet_selections::Entity::find()
        .filter(bet_selections::Column::BetId.eq(bet_id))
        .order_by_asc(bet_selections::Column::Id)
        .all(conn)
        .await
}
