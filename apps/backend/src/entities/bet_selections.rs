use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One selection of a bet. Odds are stored in thousandths
/// (`odds_milli = odds * 1000`); `(bet_id, selection_id)` is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bet_selections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "bet_id")]
    pub bet_id: i64,
    #[sea_orm(column_name = "selection_id")]
    pub selection_id: i64,
    #[sea_orm(column_name = "odds_milli")]
    pub odds_milli: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bets::Entity",
        from = "Column::BetId",
        to = "super::bets::Column::Id"
    )]
    Bet,
}

impl Related<super::bets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
