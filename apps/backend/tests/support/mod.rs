//! Shared helpers for integration tests.

pub mod factory;
pub mod state;

#[allow(unused_imports)]
pub use factory::{bet_request, seed_player};
#[allow(unused_imports)]
pub use state::{test_state, test_state_with_limit};
