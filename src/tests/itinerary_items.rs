use axum::http::StatusCode;
use serde_json::Value;
use serde_json::json;

use crate::tests::helper;

#[tokio::test]
async fn test_itinerary_items() {
    let mut app = helper::setup_test_app().await;

    let trip_id = helper::create_trip(&mut app, "Japan 2024").await;
    let kyoto_id = helper::create_destination(&mut app, trip_id, "Kyoto").await;

    let (status_code, item) = helper::post(
        &mut app,
        "/itinerary",
        &json!({
            "trip_id": trip_id,
            "destination_id": kyoto_id,
            "title": "Fushimi Inari",
            "date": "2024-04-03",
            "start_time": "07:00",
            "end_time": "10:30",
            "location": "Fushimi-ku",
            "cost": 0.0,
        }),
    )
    .await;
    assert_eq!(StatusCode::CREATED, status_code);
    assert_eq!("Fushimi Inari", item["title"]);
    assert_eq!(kyoto_id, item["destination_id"].as_i64().unwrap());
    assert_eq!("07:00", item["start_time"]);
    assert_eq!(0.0, item["cost"].as_f64().unwrap());
    let item_id = item["id"].as_i64().unwrap();

    let (status_code, other) = helper::post(
        &mut app,
        "/itinerary",
        &json!({ "trip_id": trip_id, "title": "Flight home", "cost": 812.5 }),
    )
    .await;
    assert_eq!(StatusCode::CREATED, status_code);
    assert_eq!(Value::Null, other["destination_id"]);
    let other_id = other["id"].as_i64().unwrap();

    // filters
    let (_, page) = helper::get(&mut app, &format!("/itinerary?trip_id={trip_id}")).await;
    assert_eq!(vec![other_id, item_id], helper::item_ids(&page));

    let (_, page) = helper::get(
        &mut app,
        &format!("/itinerary?trip_id={trip_id}&destination_id={kyoto_id}"),
    )
    .await;
    assert_eq!(vec![item_id], helper::item_ids(&page));

    // partial update
    let (status_code, updated) = helper::put(
        &mut app,
        &format!("/itinerary/{item_id}"),
        &json!({ "cost": 12.0, "location": null }),
    )
    .await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(12.0, updated["cost"].as_f64().unwrap());
    assert_eq!(Value::Null, updated["location"]);
    assert_eq!("Fushimi Inari", updated["title"]);
    assert_eq!(kyoto_id, updated["destination_id"].as_i64().unwrap());

    // delete
    let (status_code, _) = helper::delete(&mut app, &format!("/itinerary/{other_id}")).await;
    assert_eq!(StatusCode::NO_CONTENT, status_code);

    let (status_code, error) = helper::get(&mut app, &format!("/itinerary/{other_id}")).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!("Itinerary item not found", error["detail"]);
}

#[tokio::test]
async fn test_destination_delete_keeps_items() {
    let mut app = helper::setup_test_app().await;

    let trip_id = helper::create_trip(&mut app, "Japan 2024").await;
    let kyoto_id = helper::create_destination(&mut app, trip_id, "Kyoto").await;

    let (_, item) = helper::post(
        &mut app,
        "/itinerary",
        &json!({ "trip_id": trip_id, "destination_id": kyoto_id, "title": "Kinkaku-ji" }),
    )
    .await;
    let item_id = item["id"].as_i64().unwrap();

    let (status_code, _) = helper::delete(&mut app, &format!("/destinations/{kyoto_id}")).await;
    assert_eq!(StatusCode::NO_CONTENT, status_code);

    let (status_code, item) = helper::get(&mut app, &format!("/itinerary/{item_id}")).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Value::Null, item["destination_id"]);
    assert_eq!(trip_id, item["trip_id"].as_i64().unwrap());
}

#[tokio::test]
async fn test_item_references() {
    let mut app = helper::setup_test_app().await;

    let trip_id = helper::create_trip(&mut app, "Japan 2024").await;
    let other_trip_id = helper::create_trip(&mut app, "France 2024").await;
    let kyoto_id = helper::create_destination(&mut app, trip_id, "Kyoto").await;
    let paris_id = helper::create_destination(&mut app, other_trip_id, "Paris").await;

    // unknown destination
    let (status_code, error) = helper::post(
        &mut app,
        "/itinerary",
        &json!({ "trip_id": trip_id, "destination_id": 999, "title": "Somewhere" }),
    )
    .await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!("Destination not found", error["detail"]);

    // destination of another trip
    let (status_code, error) = helper::post(
        &mut app,
        "/itinerary",
        &json!({ "trip_id": trip_id, "destination_id": paris_id, "title": "Eiffel tower" }),
    )
    .await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
    assert_eq!("Destination does not belong to trip", error["detail"]);

    let (_, page) = helper::get(&mut app, "/itinerary").await;
    assert_eq!(0, page["meta"]["total"]);

    let (_, item) = helper::post(
        &mut app,
        "/itinerary",
        &json!({ "trip_id": trip_id, "destination_id": kyoto_id, "title": "Tea ceremony" }),
    )
    .await;
    let item_id = item["id"].as_i64().unwrap();

    // moving to another trip while keeping a destination of the old trip
    let (status_code, _) = helper::put(
        &mut app,
        &format!("/itinerary/{item_id}"),
        &json!({ "trip_id": other_trip_id }),
    )
    .await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);

    // moving to an unknown trip
    let (status_code, error) = helper::put(
        &mut app,
        &format!("/itinerary/{item_id}"),
        &json!({ "trip_id": 999 }),
    )
    .await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!("Trip not found", error["detail"]);

    // moving along with a destination of the new trip
    let (status_code, item) = helper::put(
        &mut app,
        &format!("/itinerary/{item_id}"),
        &json!({ "trip_id": other_trip_id, "destination_id": paris_id }),
    )
    .await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(other_trip_id, item["trip_id"].as_i64().unwrap());
    assert_eq!(paris_id, item["destination_id"].as_i64().unwrap());

    // clearing the destination
    let (status_code, item) = helper::put(
        &mut app,
        &format!("/itinerary/{item_id}"),
        &json!({ "destination_id": null }),
    )
    .await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Value::Null, item["destination_id"]);

    // required fields can not be cleared
    let (status_code, error) = helper::put(
        &mut app,
        &format!("/itinerary/{item_id}"),
        &json!({ "trip_id": null, "title": null }),
    )
    .await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
    assert_eq!(vec!["trip_id", "title"], helper::error_fields(&error));
}

#[tokio::test]
async fn test_item_validation() {
    let mut app = helper::setup_test_app().await;

    let trip_id = helper::create_trip(&mut app, "Japan 2024").await;

    let (status_code, error) = helper::post(
        &mut app,
        "/itinerary",
        &json!({
            "trip_id": trip_id,
            "destination_id": 0,
            "title": "Karaoke",
            "start_time": "x".repeat(21),
            "location": "x".repeat(256),
        }),
    )
    .await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
    assert_eq!(
        vec!["start_time", "location", "destination_id"],
        helper::error_fields(&error)
    );
}

#[tokio::test]
async fn test_item_for_missing_trip() {
    let mut app = helper::setup_test_app().await;

    let (status_code, error) = helper::post(
        &mut app,
        "/itinerary",
        &json!({ "trip_id": 999, "title": "Sunset walk" }),
    )
    .await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!("Trip not found", error["detail"]);

    let (_, page) = helper::get(&mut app, "/itinerary").await;
    assert_eq!(0, page["meta"]["total"]);
}
