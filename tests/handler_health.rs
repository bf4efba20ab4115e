mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use login_demo::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["sessions"]["status"], "ok");
    assert_eq!(json["checks"]["sessions"]["message"], "Active sessions: 0");
}

#[tokio::test]
async fn test_health_counts_sessions() {
    let server = common::make_server(common::create_test_state());

    common::post_login(&server, common::USER_EMAIL, common::USER_PASSWORD).await;
    common::post_login(&server, common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await;

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["checks"]["sessions"]["message"], "Active sessions: 2");
}
