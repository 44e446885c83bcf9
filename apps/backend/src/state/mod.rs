pub mod app_state;
pub mod wager_config;
