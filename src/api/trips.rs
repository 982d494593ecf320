//! Trips API endpoints
//!
//! Trips are the root of everything, deleting one deletes all of its records

use axum::Extension;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::database::CreateTripValues;
use crate::database::Database;
use crate::database::UpdateTripValues;
use crate::patch::Patch;
use crate::trips::Trip;

use super::Error;
use super::Form;
use super::PathParameters;
use super::QueryParameters;
use super::Success;
use super::pagination::ListParameters;
use super::pagination::PageResponse;
use super::utils::fetch_trip;
use super::validation::NAME_MAX_LENGTH;
use super::validation::Violations;

/// Trip response going to the user
#[derive(Debug, Serialize)]
pub struct TripResponse {
    /// Trip ID
    pub id: i64,

    /// Name of the trip
    pub name: String,

    /// Free form description
    pub description: Option<String>,

    /// First day of the trip
    pub start_date: Option<NaiveDate>,

    /// Last day of the trip
    pub end_date: Option<NaiveDate>,

    /// Creation date
    pub created_at: NaiveDateTime,

    /// Last updated at
    pub updated_at: NaiveDateTime,
}

impl TripResponse {
    /// Create a response from a [`Trip`](Trip)
    fn from_trip(trip: Trip) -> Self {
        Self {
            id: trip.id,
            name: trip.name,
            description: trip.description,
            start_date: trip.start_date,
            end_date: trip.end_date,
            created_at: trip.created_at,
            updated_at: trip.updated_at,
        }
    }
}

/// List trips, newest first
///
/// Request:
/// ```sh
/// curl -v http://localhost:8000/trips?offset=0&limit=25
/// ```
///
/// Response:
/// ```json
/// { "items": [ { "id": 1, "name": "Japan 2024" ... } ], "meta": { "total": 1, "offset": 0, "limit": 25 } }
/// ```
pub async fn list(
    Extension(database): Extension<Database>,
    QueryParameters(parameters): QueryParameters<ListParameters>,
) -> Result<Success<PageResponse<TripResponse>>, Error> {
    let pagination = parameters.pagination()?;

    let page = database
        .find_trips(pagination)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(PageResponse::from_page(
        page,
        pagination,
        TripResponse::from_trip,
    )))
}

/// Get a single trip
///
/// Request:
/// ```sh
/// curl -v http://localhost:8000/trips/1
/// ```
///
/// Response:
/// ```json
/// { "id": 1, "name": "Japan 2024" ... }
/// ```
pub async fn single(
    Extension(database): Extension<Database>,
    PathParameters(trip_id): PathParameters<i64>,
) -> Result<Success<TripResponse>, Error> {
    fetch_trip(&database, trip_id)
        .await
        .map(|trip| Success::ok(TripResponse::from_trip(trip)))
}

/// Create trip form
#[derive(Debug, Deserialize)]
pub struct CreateTripForm {
    /// Name of the trip, between 1 and 200 characters
    name: String,

    description: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl CreateTripForm {
    fn validate(&self) -> Result<(), Error> {
        Violations::new()
            .length("name", &self.name, 1, NAME_MAX_LENGTH)
            .finish()
    }
}

/// Create a trip based on the [`CreateTripForm`](CreateTripForm) form
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "name": "Japan 2024", "start_date": "2024-04-01" }' \
///     http://localhost:8000/trips
/// ```
///
/// Response
/// ```json
/// { "id": 1, "name": "Japan 2024", "start_date": "2024-04-01" ... }
/// ```
pub async fn create(
    Extension(database): Extension<Database>,
    Form(form): Form<CreateTripForm>,
) -> Result<Success<TripResponse>, Error> {
    form.validate()?;

    let values = CreateTripValues {
        name: &form.name,
        description: form.description.as_deref(),
        start_date: form.start_date,
        end_date: form.end_date,
    };

    let trip = database
        .create_trip(&values)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!("Created trip {}", trip.id);

    Ok(Success::created(TripResponse::from_trip(trip)))
}

/// Update trip form
///
/// Absent fields are not touched, `null` clears a field
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTripForm {
    /// New name, can not be cleared
    name: Patch<String>,

    description: Patch<String>,
    start_date: Patch<NaiveDate>,
    end_date: Patch<NaiveDate>,
}

impl UpdateTripForm {
    fn validate(&self) -> Result<(), Error> {
        Violations::new()
            .required_text_patch("name", &self.name, 1, NAME_MAX_LENGTH)
            .finish()
    }
}

/// Update a trip based on the [`UpdateTripForm`](UpdateTripForm) form
///
/// Request:
/// ```sh
/// curl -v -XPUT -H 'Content-Type: application/json' \
///     -d '{ "description": "Cherry blossoms", "end_date": null }' \
///     http://localhost:8000/trips/1
/// ```
///
/// Response
/// ```json
/// { "id": 1, "name": "Japan 2024", "description": "Cherry blossoms" ... }
/// ```
pub async fn update(
    Extension(database): Extension<Database>,
    PathParameters(trip_id): PathParameters<i64>,
    Form(form): Form<UpdateTripForm>,
) -> Result<Success<TripResponse>, Error> {
    form.validate()?;

    let trip = fetch_trip(&database, trip_id).await?;

    let values = UpdateTripValues {
        name: form.name,
        description: form.description,
        start_date: form.start_date,
        end_date: form.end_date,
    };

    let trip = database
        .update_trip(&trip, values)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Trip not found")), Ok)?;

    tracing::debug!("Updated trip {}", trip.id);

    Ok(Success::ok(TripResponse::from_trip(trip)))
}

/// Delete a trip, including all records belonging to it
///
/// Request:
/// ```sh
/// curl -v -XDELETE http://localhost:8000/trips/1
/// ```
pub async fn delete(
    Extension(database): Extension<Database>,
    PathParameters(trip_id): PathParameters<i64>,
) -> Result<Success<TripResponse>, Error> {
    let trip = fetch_trip(&database, trip_id).await?;

    database
        .delete_trip(&trip)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!("Deleted trip {}", trip.id);

    Ok(Success::no_content())
}
