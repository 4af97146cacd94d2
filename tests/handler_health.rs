mod common;

use address_book::api::handlers::health_handler;
use axum::{Router, routing::get};
use axum_test::TestServer;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, repository) = common::create_test_state();
    common::create_test_address(&repository, "Home", 0.0, 0.0).await;

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["checks"]["storage"]["message"], "Connected, 1 addresses");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (server, _repository) = common::make_server();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("storage").is_some());
}
