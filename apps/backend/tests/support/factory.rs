use backend::repos::players::{self, Player};
use rust_decimal::Decimal;
use sea_orm::DatabaseTransaction;
use serde_json::{json, Value};

/// Create a player with the given balance through the shared transaction.
pub async fn seed_player(txn: &DatabaseTransaction, balance: Decimal) -> Player {
    players::create_player(txn, "Test Player", balance)
        .await
        .expect("seed player")
}

/// Build a bet request body from (selection id, odds) pairs.
pub fn bet_request(player_id: i64, stake: &str, selections: &[(i64, &str)]) -> Value {
    let selections: Vec<Value> = selections
        .iter()
        .map(|(id, odds)| json!({ "id": id, "odds": odds.parse::<f64>().expect("odds literal") }))
        .collect();
    json!({
        "player_id": player_id,
        "stake_amount": stake.parse::<f64>().expect("stake literal"),
        "selections": selections,
    })
}
