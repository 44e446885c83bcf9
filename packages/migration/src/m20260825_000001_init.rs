use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    DisplayName,
    BalanceCents,
    LockVersion,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Bets {
    Table,
    Id,
    PlayerId,
    StakeCents,
    CreatedAt,
}

#[derive(Iden)]
enum BetSelections {
    Table,
    Id,
    BetId,
    SelectionId,
    OddsMilli,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Players::DisplayName).string().not_null())
                    .col(
                        ColumnDef::new(Players::BalanceCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bets::PlayerId).big_integer().not_null())
                    .col(ColumnDef::new(Bets::StakeCents).big_integer().not_null())
                    .col(
                        ColumnDef::new(Bets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("bets_player_id_fkey")
                            .from(Bets::Table, Bets::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("bets_player_id_idx")
                    .table(Bets::Table)
                    .col(Bets::PlayerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BetSelections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BetSelections::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BetSelections::BetId).big_integer().not_null())
                    .col(
                        ColumnDef::new(BetSelections::SelectionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BetSelections::OddsMilli)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BetSelections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("bet_selections_bet_id_fkey")
                            .from(BetSelections::Table, BetSelections::BetId)
                            .to(Bets::Table, Bets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // No two selections under the same bet may share a selection_id.
        manager
            .create_index(
                Index::create()
                    .name("bet_selections_bet_id_selection_id_key")
                    .table(BetSelections::Table)
                    .col(BetSelections::BetId)
                    .col(BetSelections::SelectionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BetSelections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        Ok(())
    }
}
