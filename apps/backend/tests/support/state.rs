use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::state::wager_config::WagerConfig;
use rust_decimal::Decimal;

/// Build an AppState backed by a migrated test database.
///
/// Defaults to an isolated in-memory sqlite database per call, so tests
/// never see each other's rows.
pub async fn test_state() -> AppState {
    backend::telemetry::init_test_tracing();
    build_state()
        .with_db(DbProfile::Test)
        .build()
        .await
        .expect("build test state with DB")
}

/// Same as [`test_state`] but with a custom win limit.
pub async fn test_state_with_limit(max_win_amount: Decimal) -> AppState {
    backend::telemetry::init_test_tracing();
    build_state()
        .with_db(DbProfile::Test)
        .with_wager_config(WagerConfig::new(max_win_amount))
        .build()
        .await
        .expect("build test state with DB")
}
