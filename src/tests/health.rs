use axum::http::StatusCode;
use serde_json::json;

use crate::tests::helper;

#[tokio::test]
async fn test_health() {
    let mut app = helper::setup_test_app().await;

    let (status_code, body) = helper::get(&mut app, "/").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(json!({ "message": "Healthy" }), body);
}
