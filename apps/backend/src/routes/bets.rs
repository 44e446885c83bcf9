//! Bet placement HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Serialize;

use crate::db::txn::with_txn;
use crate::errors::PlacementError;
use crate::services::bets::{BetService, PlaceBetRequest};
use crate::state::app_state::AppState;

#[derive(Serialize)]
struct PlacementAccepted {
    message: &'static str,
}

/// POST /api/bets
///
/// Places a bet: balance check, selection validation, win-limit check,
/// persistence and balance debit, all inside one transaction. Success is
/// 201; each rejection kind maps to its own status code, with response
/// bodies kept wire-compatible with the original API.
async fn place_bet(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    payload: web::Json<PlaceBetRequest>,
) -> Result<HttpResponse, PlacementError> {
    let request = payload.into_inner();
    let config = app_state.wager().clone();

    let _placed = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = BetService::new();
            service.place_bet(txn, &config, &request).await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(PlacementAccepted {
        message: "Your bet is placed",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/bets").route(web::post().to(place_bet)));
}
