pub mod bet_selections;
pub mod bets;
pub mod players;
