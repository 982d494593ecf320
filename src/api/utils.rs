//! Utility functions for the API

use crate::accommodations::Accommodation;
use crate::api::Error;
use crate::database::Database;
use crate::destinations::Destination;
use crate::itinerary_items::ItineraryItem;
use crate::notes::Note;
use crate::transports::Transport;
use crate::trips::Trip;

/// Fetch trip from database
pub async fn fetch_trip(database: &Database, trip_id: i64) -> Result<Trip, Error> {
    database
        .find_single_trip_by_id(trip_id)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Trip not found")), Ok)
}

/// Fetch destination from database
pub async fn fetch_destination(
    database: &Database,
    destination_id: i64,
) -> Result<Destination, Error> {
    database
        .find_single_destination_by_id(destination_id)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Destination not found")), Ok)
}

/// Fetch itinerary item from database
pub async fn fetch_itinerary_item(
    database: &Database,
    item_id: i64,
) -> Result<ItineraryItem, Error> {
    database
        .find_single_itinerary_item_by_id(item_id)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Itinerary item not found")), Ok)
}

/// Fetch accommodation from database
pub async fn fetch_accommodation(
    database: &Database,
    accommodation_id: i64,
) -> Result<Accommodation, Error> {
    database
        .find_single_accommodation_by_id(accommodation_id)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Accommodation not found")), Ok)
}

/// Fetch transport from database
pub async fn fetch_transport(database: &Database, transport_id: i64) -> Result<Transport, Error> {
    database
        .find_single_transport_by_id(transport_id)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Transport not found")), Ok)
}

/// Fetch note from database
pub async fn fetch_note(database: &Database, note_id: i64) -> Result<Note, Error> {
    database
        .find_single_note_by_id(note_id)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Note not found")), Ok)
}

/// Make sure a referenced trip exists when a patch changes it
pub async fn ensure_trip_exists(database: &Database, trip_id: Option<&i64>) -> Result<(), Error> {
    if let Some(trip_id) = trip_id {
        fetch_trip(database, *trip_id).await?;
    }

    Ok(())
}
