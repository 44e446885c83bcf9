//! End-to-end happy path for POST /api/bets.
//!
//! balance=100, stake=10, selections [{1, 2.0}, {2, 3.0}] → 201, one bet
//! with stake 10, two selections, balance debited to 90.

mod support;

use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpMessage};
use backend::db::require_db;
use backend::db::txn::SharedTxn;
use backend::entities::{bet_selections, bets, players};
use backend::routes;
use rust_decimal_macros::dec;
use sea_orm::EntityTrait;
use serde_json::Value;

#[tokio::test]
async fn placing_a_valid_bet_persists_and_debits() {
    let state = support::test_state().await;
    let db = require_db(&state).expect("DB required for this test");
    let shared = SharedTxn::open(db).await.expect("open shared txn");

    let player = support::seed_player(shared.transaction(), dec!(100)).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let body = support::bet_request(player.id, "10", &[(1, "2.0"), (2, "3.0")]);
    let req = test::TestRequest::post()
        .uri("/api/bets")
        .set_json(&body)
        .to_request();
    req.extensions_mut().insert(shared.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "Your bet is placed");

    // One bet with the stake, in cents.
    let all_bets = bets::Entity::find()
        .all(shared.transaction())
        .await
        .expect("query bets");
    assert_eq!(all_bets.len(), 1);
    assert_eq!(all_bets[0].player_id, player.id);
    assert_eq!(all_bets[0].stake_cents, 1000);

    // Two selections, in request order, odds in thousandths.
    let selections = bet_selections::Entity::find()
        .all(shared.transaction())
        .await
        .expect("query selections");
    assert_eq!(selections.len(), 2);
    assert_eq!(selections[0].bet_id, all_bets[0].id);
    assert_eq!(selections[0].selection_id, 1);
    assert_eq!(selections[0].odds_milli, 2000);
    assert_eq!(selections[1].selection_id, 2);
    assert_eq!(selections[1].odds_milli, 3000);

    // Balance debited to 90, optimistic version bumped.
    let updated = players::Entity::find_by_id(player.id)
        .one(shared.transaction())
        .await
        .expect("query player")
        .expect("player exists");
    assert_eq!(updated.balance_cents, 9000);
    assert_eq!(updated.lock_version, 2);
}

#[tokio::test]
async fn zero_stake_bet_is_accepted() {
    let state = support::test_state().await;
    let db = require_db(&state).expect("DB required for this test");
    let shared = SharedTxn::open(db).await.expect("open shared txn");

    let player = support::seed_player(shared.transaction(), dec!(5)).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let body = support::bet_request(player.id, "0", &[(1, "1500")]);
    let req = test::TestRequest::post()
        .uri("/api/bets")
        .set_json(&body)
        .to_request();
    req.extensions_mut().insert(shared.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let updated = players::Entity::find_by_id(player.id)
        .one(shared.transaction())
        .await
        .expect("query player")
        .expect("player exists");
    assert_eq!(updated.balance_cents, 500);
}
