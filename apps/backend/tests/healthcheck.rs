use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::wager_config::WagerConfig;
use serde_json::Value;

#[tokio::test]
async fn health_endpoint_is_200_without_db() {
    let state = AppState::new_without_db(WagerConfig::default());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn request_id_header_is_set_by_middleware() {
    let state = AppState::new_without_db(WagerConfig::default());
    let app = test::init_service(
        App::new()
            .wrap(backend::middleware::RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("x-request-id").is_some());
}
