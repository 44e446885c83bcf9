//! SeaORM query code, generic over `ConnectionTrait`.
//!
//! Adapter functions return `sea_orm::DbErr`; the repos layer maps to
//! `DomainError` via `infra::db_errors::map_db_err`.

pub mod bets_sea;
pub mod players_sea;
