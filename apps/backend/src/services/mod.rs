pub mod bets;
