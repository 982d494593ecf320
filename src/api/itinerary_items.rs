//! Itinerary API endpoints
//!
//! Items of the day-by-day plan of a trip, optionally tied to one of its destinations

use axum::Extension;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::database::CreateItineraryItemValues;
use crate::database::Database;
use crate::database::ItineraryItemFilter;
use crate::database::UpdateItineraryItemValues;
use crate::itinerary_items::ItineraryItem;
use crate::patch::Patch;

use super::Error;
use super::Form;
use super::PathParameters;
use super::QueryParameters;
use super::Success;
use super::pagination::ListParameters;
use super::pagination::PageResponse;
use super::utils::ensure_trip_exists;
use super::utils::fetch_destination;
use super::utils::fetch_itinerary_item;
use super::utils::fetch_trip;
use super::validation::NAME_MAX_LENGTH;
use super::validation::Violations;

const TIME_MAX_LENGTH: usize = 20;
const LOCATION_MAX_LENGTH: usize = 255;

/// Itinerary item response going to the user
#[derive(Debug, Serialize)]
pub struct ItineraryItemResponse {
    pub id: i64,
    pub trip_id: i64,
    pub destination_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub cost: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ItineraryItemResponse {
    /// Create a response from an [`ItineraryItem`](ItineraryItem)
    fn from_item(item: ItineraryItem) -> Self {
        Self {
            id: item.id,
            trip_id: item.trip_id,
            destination_id: item.destination_id,
            title: item.title,
            description: item.description,
            date: item.date,
            start_time: item.start_time,
            end_time: item.end_time,
            location: item.location,
            cost: item.cost,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Make sure the destination exists and is part of the trip
async fn check_destination(
    database: &Database,
    trip_id: i64,
    destination_id: i64,
) -> Result<(), Error> {
    let destination = fetch_destination(database, destination_id).await?;

    if destination.trip_id == trip_id {
        Ok(())
    } else {
        Err(Error::unprocessable_entity("Destination does not belong to trip"))
    }
}

/// List itinerary items, filtered by trip and/or destination
///
/// Request:
/// ```sh
/// curl -v 'http://localhost:8000/itinerary?trip_id=1&destination_id=2'
/// ```
pub async fn list(
    Extension(database): Extension<Database>,
    QueryParameters(parameters): QueryParameters<ListParameters>,
) -> Result<Success<PageResponse<ItineraryItemResponse>>, Error> {
    let pagination = parameters.pagination()?;

    let filter = ItineraryItemFilter {
        trip_id: parameters.trip_id,
        destination_id: parameters.destination_id,
    };

    let page = database
        .find_itinerary_items(filter, pagination)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(PageResponse::from_page(
        page,
        pagination,
        ItineraryItemResponse::from_item,
    )))
}

/// Get a single itinerary item
pub async fn single(
    Extension(database): Extension<Database>,
    PathParameters(item_id): PathParameters<i64>,
) -> Result<Success<ItineraryItemResponse>, Error> {
    fetch_itinerary_item(&database, item_id)
        .await
        .map(|item| Success::ok(ItineraryItemResponse::from_item(item)))
}

/// Create itinerary item form
#[derive(Debug, Deserialize)]
pub struct CreateItineraryItemForm {
    trip_id: i64,

    /// Destination of the same trip, if any
    destination_id: Option<i64>,

    title: String,
    description: Option<String>,
    date: Option<NaiveDate>,

    /// Free form, like `09:30`
    start_time: Option<String>,

    /// Free form, like `11:00`
    end_time: Option<String>,

    location: Option<String>,

    /// Estimated cost
    cost: Option<f64>,
}

impl CreateItineraryItemForm {
    fn validate(&self) -> Result<(), Error> {
        let mut violations = Violations::new();

        violations
            .id("trip_id", self.trip_id)
            .length("title", &self.title, 1, NAME_MAX_LENGTH)
            .optional_length("start_time", self.start_time.as_deref(), TIME_MAX_LENGTH)
            .optional_length("end_time", self.end_time.as_deref(), TIME_MAX_LENGTH)
            .optional_length("location", self.location.as_deref(), LOCATION_MAX_LENGTH);

        if let Some(destination_id) = self.destination_id {
            violations.id("destination_id", destination_id);
        }

        violations.finish()
    }
}

/// Create an itinerary item based on the [`CreateItineraryItemForm`](CreateItineraryItemForm)
/// form
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "trip_id": 1, "destination_id": 2, "title": "Fushimi Inari", "date": "2024-04-03" }' \
///     http://localhost:8000/itinerary
/// ```
pub async fn create(
    Extension(database): Extension<Database>,
    Form(form): Form<CreateItineraryItemForm>,
) -> Result<Success<ItineraryItemResponse>, Error> {
    form.validate()?;

    let trip = fetch_trip(&database, form.trip_id).await?;

    if let Some(destination_id) = form.destination_id {
        check_destination(&database, trip.id, destination_id).await?;
    }

    let values = CreateItineraryItemValues {
        trip_id: trip.id,
        destination_id: form.destination_id,
        title: &form.title,
        description: form.description.as_deref(),
        date: form.date,
        start_time: form.start_time.as_deref(),
        end_time: form.end_time.as_deref(),
        location: form.location.as_deref(),
        cost: form.cost,
    };

    let item = database
        .create_itinerary_item(&values)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!("Created itinerary item {} for trip {}", item.id, item.trip_id);

    Ok(Success::created(ItineraryItemResponse::from_item(item)))
}

/// Update itinerary item form
///
/// Moving an item to another trip requires its destination to be part of that trip as well,
/// or to be cleared in the same request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateItineraryItemForm {
    trip_id: Patch<i64>,
    destination_id: Patch<i64>,
    title: Patch<String>,
    description: Patch<String>,
    date: Patch<NaiveDate>,
    start_time: Patch<String>,
    end_time: Patch<String>,
    location: Patch<String>,
    cost: Patch<f64>,
}

impl UpdateItineraryItemForm {
    fn validate(&self) -> Result<(), Error> {
        Violations::new()
            .required_id_patch("trip_id", &self.trip_id)
            .id_patch("destination_id", &self.destination_id)
            .required_text_patch("title", &self.title, 1, NAME_MAX_LENGTH)
            .text_patch("start_time", &self.start_time, TIME_MAX_LENGTH)
            .text_patch("end_time", &self.end_time, TIME_MAX_LENGTH)
            .text_patch("location", &self.location, LOCATION_MAX_LENGTH)
            .finish()
    }
}

/// Update an itinerary item based on the [`UpdateItineraryItemForm`](UpdateItineraryItemForm)
/// form
pub async fn update(
    Extension(database): Extension<Database>,
    PathParameters(item_id): PathParameters<i64>,
    Form(form): Form<UpdateItineraryItemForm>,
) -> Result<Success<ItineraryItemResponse>, Error> {
    form.validate()?;

    let item = fetch_itinerary_item(&database, item_id).await?;

    ensure_trip_exists(&database, form.trip_id.value()).await?;

    let trip_id = form.trip_id.value().copied().unwrap_or(item.trip_id);
    let destination_id = match &form.destination_id {
        Patch::Missing => item.destination_id,
        Patch::Null => None,
        Patch::Value(destination_id) => Some(*destination_id),
    };

    let references_changed = trip_id != item.trip_id || destination_id != item.destination_id;
    if let Some(destination_id) = destination_id.filter(|_| references_changed) {
        check_destination(&database, trip_id, destination_id).await?;
    }

    let values = UpdateItineraryItemValues {
        trip_id: form.trip_id,
        destination_id: form.destination_id,
        title: form.title,
        description: form.description,
        date: form.date,
        start_time: form.start_time,
        end_time: form.end_time,
        location: form.location,
        cost: form.cost,
    };

    let item = database
        .update_itinerary_item(&item, values)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Itinerary item not found")), Ok)?;

    tracing::debug!("Updated itinerary item {}", item.id);

    Ok(Success::ok(ItineraryItemResponse::from_item(item)))
}

/// Delete an itinerary item
pub async fn delete(
    Extension(database): Extension<Database>,
    PathParameters(item_id): PathParameters<i64>,
) -> Result<Success<ItineraryItemResponse>, Error> {
    let item = fetch_itinerary_item(&database, item_id).await?;

    database
        .delete_itinerary_item(&item)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!("Deleted itinerary item {}", item.id);

    Ok(Success::no_content())
}
