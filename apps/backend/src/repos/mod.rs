//! Repository functions for the domain layer.
//!
//! Domain models live here; queries delegate to the adapters and map
//! `DbErr` into `DomainError`.

pub mod bets;
pub mod players;
