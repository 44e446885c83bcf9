pub mod bets;
pub mod health;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    bets::configure_routes(cfg);
}
