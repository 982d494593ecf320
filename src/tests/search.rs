use axum::http::StatusCode;
use serde_json::json;

use crate::tests::helper;

#[tokio::test]
async fn test_search() {
    let mut app = helper::setup_test_app().await;

    let (status_code, body) = helper::get(&mut app, "/destinations/search?q=Par").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(
        json!({
            "results": [
                { "name": "Paris", "country": "France", "region": "Île-de-France", "iata": "CDG" },
            ],
            "total": 1,
        }),
        body
    );

    let (status_code, body) = helper::get(&mut app, "/destinations/search?q=CDG").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!("Paris", body["results"][0]["name"]);

    let (status_code, body) =
        helper::get(&mut app, "/destinations/search?q=tokyo&country=usa").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(json!({ "results": [], "total": 0 }), body);

    let (status_code, body) =
        helper::get(&mut app, "/destinations/search?q=o&country=Japan").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(2, body["total"]);
}

#[tokio::test]
async fn test_search_requires_query() {
    let mut app = helper::setup_test_app().await;

    let (status_code, error) = helper::get(&mut app, "/destinations/search").await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
    assert_eq!(vec!["q"], helper::error_fields(&error));

    let (status_code, _) = helper::get(&mut app, "/destinations/search?q=").await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
}
