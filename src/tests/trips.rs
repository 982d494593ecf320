use std::time::Duration;

use axum::http::StatusCode;
use serde_json::Value;
use serde_json::json;

use crate::tests::helper;

#[tokio::test]
async fn test_trip_with_destination() {
    let mut app = helper::setup_test_app().await;

    // create trip
    let (status_code, trip) = helper::post(
        &mut app,
        "/trips",
        &json!({
            "name": "Japan 2024",
            "description": "Cherry blossoms",
            "start_date": "2024-04-01",
            "end_date": "2024-04-14",
        }),
    )
    .await;
    assert_eq!(StatusCode::CREATED, status_code);
    assert!(trip["id"].as_i64().unwrap() >= 1);
    assert_eq!("Japan 2024", trip["name"]);
    assert_eq!("Cherry blossoms", trip["description"]);
    assert_eq!("2024-04-01", trip["start_date"]);
    assert_eq!("2024-04-14", trip["end_date"]);
    assert!(trip["created_at"].is_string());
    assert!(trip["updated_at"].is_string());
    let trip_id = trip["id"].as_i64().unwrap();

    // invalid destination name
    let (status_code, error) = helper::post(
        &mut app,
        "/destinations",
        &json!({ "trip_id": trip_id, "name": "" }),
    )
    .await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
    assert_eq!(vec!["name"], helper::error_fields(&error));

    // valid destination
    let (status_code, destination) = helper::post(
        &mut app,
        "/destinations",
        &json!({ "trip_id": trip_id, "name": "Kyoto", "country": "Japan" }),
    )
    .await;
    assert_eq!(StatusCode::CREATED, status_code);
    assert_eq!(trip_id, destination["trip_id"].as_i64().unwrap());
    let destination_id = destination["id"].as_i64().unwrap();

    // delete trip
    let (status_code, body) = helper::delete(&mut app, &format!("/trips/{trip_id}")).await;
    assert_eq!(StatusCode::NO_CONTENT, status_code);
    assert_eq!(Value::Null, body);

    // trip and destination are gone
    let (status_code, error) = helper::get(&mut app, &format!("/trips/{trip_id}")).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!("Trip not found", error["detail"]);

    let (status_code, error) =
        helper::get(&mut app, &format!("/destinations/{destination_id}")).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!("Destination not found", error["detail"]);
}

#[tokio::test]
async fn test_delete_trip_removes_everything() {
    let mut app = helper::setup_test_app().await;

    let trip_id = helper::create_trip(&mut app, "Road trip").await;
    let other_trip_id = helper::create_trip(&mut app, "City trip").await;
    let destination_id = helper::create_destination(&mut app, trip_id, "Lyon").await;

    let (status_code, _) = helper::post(
        &mut app,
        "/itinerary",
        &json!({ "trip_id": trip_id, "destination_id": destination_id, "title": "Old town" }),
    )
    .await;
    assert_eq!(StatusCode::CREATED, status_code);

    let (status_code, _) = helper::post(
        &mut app,
        "/accommodations",
        &json!({ "trip_id": trip_id, "name": "Camping" }),
    )
    .await;
    assert_eq!(StatusCode::CREATED, status_code);

    let (status_code, _) = helper::post(
        &mut app,
        "/transport",
        &json!({ "trip_id": trip_id, "type": "car" }),
    )
    .await;
    assert_eq!(StatusCode::CREATED, status_code);

    let (status_code, _) = helper::post(
        &mut app,
        "/notes",
        &json!({ "trip_id": trip_id, "title": "Vignette" }),
    )
    .await;
    assert_eq!(StatusCode::CREATED, status_code);

    // a record of another trip stays
    let (status_code, _) = helper::post(
        &mut app,
        "/notes",
        &json!({ "trip_id": other_trip_id, "title": "Museum pass" }),
    )
    .await;
    assert_eq!(StatusCode::CREATED, status_code);

    let (status_code, _) = helper::delete(&mut app, &format!("/trips/{trip_id}")).await;
    assert_eq!(StatusCode::NO_CONTENT, status_code);

    for resource in [
        "destinations",
        "itinerary",
        "accommodations",
        "transport",
        "notes",
    ] {
        let (status_code, page) =
            helper::get(&mut app, &format!("/{resource}?trip_id={trip_id}")).await;
        assert_eq!(StatusCode::OK, status_code);
        assert_eq!(0, page["meta"]["total"], "{resource} of deleted trip");
    }

    let (status_code, page) = helper::get(&mut app, "/notes").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(1, page["meta"]["total"]);
    assert_eq!("Museum pass", page["items"][0]["title"]);
}

#[tokio::test]
async fn test_update_trip() {
    let mut app = helper::setup_test_app().await;

    let (_, trip) = helper::post(
        &mut app,
        "/trips",
        &json!({ "name": "Japan 2024", "description": "Cherry blossoms", "end_date": "2024-04-14" }),
    )
    .await;
    let trip_id = trip["id"].as_i64().unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    // only the provided fields change, null clears
    let (status_code, updated) = helper::put(
        &mut app,
        &format!("/trips/{trip_id}"),
        &json!({ "name": "Japan 2025", "end_date": null }),
    )
    .await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!("Japan 2025", updated["name"]);
    assert_eq!("Cherry blossoms", updated["description"]);
    assert_eq!(Value::Null, updated["end_date"]);
    assert_eq!(trip["created_at"], updated["created_at"]);
    assert_ne!(trip["updated_at"], updated["updated_at"]);

    tokio::time::sleep(Duration::from_millis(10)).await;

    // an empty update still refreshes the timestamp
    let (status_code, touched) =
        helper::put(&mut app, &format!("/trips/{trip_id}"), &json!({})).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!("Japan 2025", touched["name"]);
    assert_ne!(updated["updated_at"], touched["updated_at"]);

    // name can not be cleared
    let (status_code, error) = helper::put(
        &mut app,
        &format!("/trips/{trip_id}"),
        &json!({ "name": null }),
    )
    .await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
    assert_eq!(vec!["name"], helper::error_fields(&error));

    // name too long
    let (status_code, _) = helper::put(
        &mut app,
        &format!("/trips/{trip_id}"),
        &json!({ "name": "x".repeat(201) }),
    )
    .await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);

    // unknown trip
    let (status_code, error) =
        helper::put(&mut app, "/trips/999", &json!({ "name": "Nowhere" })).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!("Trip not found", error["detail"]);

    // stored values are unchanged by the rejected requests
    let (status_code, trip) = helper::get(&mut app, &format!("/trips/{trip_id}")).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!("Japan 2025", trip["name"]);
}

#[tokio::test]
async fn test_trip_not_found() {
    let mut app = helper::setup_test_app().await;

    let (status_code, _) = helper::get(&mut app, "/trips/1").await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);

    let (status_code, _) = helper::delete(&mut app, "/trips/1").await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);

    let (status_code, error) = helper::get(&mut app, "/trips/abc").await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
    assert_eq!("Invalid path parameter", error["detail"]);
}

#[tokio::test]
async fn test_invalid_date() {
    let mut app = helper::setup_test_app().await;

    let (status_code, error) = helper::post(
        &mut app,
        "/trips",
        &json!({ "name": "Japan 2024", "start_date": "first of april" }),
    )
    .await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
    assert_eq!("Data error", error["detail"]);

    let (_, page) = helper::get(&mut app, "/trips").await;
    assert_eq!(0, page["meta"]["total"]);
}
