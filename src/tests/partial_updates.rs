use chrono::NaiveDate;

use crate::database::CreateItineraryItemValues;
use crate::database::CreateNoteValues;
use crate::database::CreateTripValues;
use crate::database::UpdateItineraryItemValues;
use crate::database::UpdateNoteValues;
use crate::database::UpdateTripValues;
use crate::patch::Patch;
use crate::tests::helper;

fn trip_values(name: &'static str) -> CreateTripValues<'static> {
    CreateTripValues {
        name,
        description: Some("old"),
        start_date: NaiveDate::from_ymd_opt(2024, 4, 1),
        end_date: None,
    }
}

#[tokio::test]
async fn test_interleaved_trip_updates() {
    let database = helper::setup_test_database().await;

    let trip = database.create_trip(&trip_values("Japan 2024")).await.unwrap();

    // two requests read the trip before either of them writes
    let first = database.find_single_trip_by_id(trip.id).await.unwrap().unwrap();
    let second = database.find_single_trip_by_id(trip.id).await.unwrap().unwrap();

    let values = UpdateTripValues {
        description: Patch::Value("new".to_string()),
        ..UpdateTripValues::default()
    };
    database.update_trip(&first, values).await.unwrap().unwrap();

    let values = UpdateTripValues {
        name: Patch::Value("Japan 2025".to_string()),
        ..UpdateTripValues::default()
    };
    let updated = database.update_trip(&second, values).await.unwrap().unwrap();

    assert_eq!("Japan 2025", updated.name);
    assert_eq!(Some("new".to_string()), updated.description);
    assert_eq!(NaiveDate::from_ymd_opt(2024, 4, 1), updated.start_date);

    let stored = database.find_single_trip_by_id(trip.id).await.unwrap().unwrap();
    assert_eq!("Japan 2025", stored.name);
    assert_eq!(Some("new".to_string()), stored.description);
}

#[tokio::test]
async fn test_interleaved_itinerary_item_updates() {
    let database = helper::setup_test_database().await;

    let trip = database.create_trip(&trip_values("Japan 2024")).await.unwrap();

    let values = CreateItineraryItemValues {
        trip_id: trip.id,
        destination_id: None,
        title: "Fushimi Inari",
        description: None,
        date: None,
        start_time: Some("07:00"),
        end_time: None,
        location: Some("Fushimi-ku"),
        cost: Some(10.0),
    };
    let item = database.create_itinerary_item(&values).await.unwrap();

    let snapshot = database
        .find_single_itinerary_item_by_id(item.id)
        .await
        .unwrap()
        .unwrap();

    // clear the location, then change the start time through the same earlier read
    let values = UpdateItineraryItemValues {
        location: Patch::Null,
        ..UpdateItineraryItemValues::default()
    };
    database
        .update_itinerary_item(&snapshot, values)
        .await
        .unwrap()
        .unwrap();

    let values = UpdateItineraryItemValues {
        start_time: Patch::Value("06:30".to_string()),
        ..UpdateItineraryItemValues::default()
    };
    let updated = database
        .update_itinerary_item(&snapshot, values)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(Some("06:30".to_string()), updated.start_time);
    assert_eq!(None, updated.location);
    assert_eq!("Fushimi Inari", updated.title);
    assert_eq!(Some(10.0), updated.cost);
}

#[tokio::test]
async fn test_required_column_is_never_cleared() {
    let database = helper::setup_test_database().await;

    let trip = database.create_trip(&trip_values("Japan 2024")).await.unwrap();

    let values = UpdateTripValues {
        name: Patch::Null,
        description: Patch::Null,
        ..UpdateTripValues::default()
    };
    let updated = database.update_trip(&trip, values).await.unwrap().unwrap();

    assert_eq!("Japan 2024", updated.name);
    assert_eq!(None, updated.description);
    assert!(updated.updated_at >= trip.updated_at);
}

#[tokio::test]
async fn test_update_of_deleted_record() {
    let database = helper::setup_test_database().await;

    let trip = database.create_trip(&trip_values("Japan 2024")).await.unwrap();

    let values = CreateNoteValues {
        trip_id: trip.id,
        title: "Packing",
        content: None,
    };
    let note = database.create_note(&values).await.unwrap();

    // deleted after another request looked it up
    database.delete_note(&note).await.unwrap();

    let values = UpdateNoteValues {
        title: Patch::Value("Unpacking".to_string()),
        ..UpdateNoteValues::default()
    };
    assert!(database.update_note(&note, values).await.unwrap().is_none());

    database.delete_trip(&trip).await.unwrap();

    let values = UpdateTripValues {
        name: Patch::Value("Japan 2025".to_string()),
        ..UpdateTripValues::default()
    };
    assert!(database.update_trip(&trip, values).await.unwrap().is_none());
}
