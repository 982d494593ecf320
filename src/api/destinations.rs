//! Destinations API endpoints
//!
//! Places visited during a trip, plus the lookup in the destination catalog

use axum::Extension;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::database::CreateDestinationValues;
use crate::database::Database;
use crate::database::UpdateDestinationValues;
use crate::destinations::Destination;
use crate::patch::Patch;
use crate::search::SearchCatalog;
use crate::search::SearchEntry;

use super::Error;
use super::Form;
use super::PathParameters;
use super::QueryParameters;
use super::Success;
use super::pagination::ListParameters;
use super::pagination::PageResponse;
use super::utils::fetch_destination;
use super::utils::fetch_trip;
use super::validation::NAME_MAX_LENGTH;
use super::validation::Violations;

const COUNTRY_MAX_LENGTH: usize = 100;

/// Destination response going to the user
#[derive(Debug, Serialize)]
pub struct DestinationResponse {
    pub id: i64,
    pub trip_id: i64,
    pub name: String,
    pub country: Option<String>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl DestinationResponse {
    fn from_destination(destination: Destination) -> Self {
        Self {
            id: destination.id,
            trip_id: destination.trip_id,
            name: destination.name,
            country: destination.country,
            arrival_date: destination.arrival_date,
            departure_date: destination.departure_date,
            notes: destination.notes,
            created_at: destination.created_at,
            updated_at: destination.updated_at,
        }
    }
}

/// List destinations, optionally of a single trip
///
/// Request:
/// ```sh
/// curl -v http://localhost:8000/destinations?trip_id=1
/// ```
pub async fn list(
    Extension(database): Extension<Database>,
    QueryParameters(parameters): QueryParameters<ListParameters>,
) -> Result<Success<PageResponse<DestinationResponse>>, Error> {
    let pagination = parameters.pagination()?;

    let page = database
        .find_destinations(parameters.trip_id, pagination)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(PageResponse::from_page(
        page,
        pagination,
        DestinationResponse::from_destination,
    )))
}

/// Get a single destination
pub async fn single(
    Extension(database): Extension<Database>,
    PathParameters(destination_id): PathParameters<i64>,
) -> Result<Success<DestinationResponse>, Error> {
    fetch_destination(&database, destination_id)
        .await
        .map(|destination| Success::ok(DestinationResponse::from_destination(destination)))
}

/// Create destination form
#[derive(Debug, Deserialize)]
pub struct CreateDestinationForm {
    /// The trip to attach the destination to
    trip_id: i64,

    name: String,
    country: Option<String>,
    arrival_date: Option<NaiveDate>,
    departure_date: Option<NaiveDate>,
    notes: Option<String>,
}

impl CreateDestinationForm {
    fn validate(&self) -> Result<(), Error> {
        Violations::new()
            .id("trip_id", self.trip_id)
            .length("name", &self.name, 1, NAME_MAX_LENGTH)
            .optional_length("country", self.country.as_deref(), COUNTRY_MAX_LENGTH)
            .finish()
    }
}

/// Create a destination based on the [`CreateDestinationForm`](CreateDestinationForm) form
///
/// The trip must exist
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "trip_id": 1, "name": "Kyoto", "country": "Japan" }' \
///     http://localhost:8000/destinations
/// ```
///
/// Response
/// ```json
/// { "id": 1, "trip_id": 1, "name": "Kyoto", "country": "Japan" ... }
/// ```
pub async fn create(
    Extension(database): Extension<Database>,
    Form(form): Form<CreateDestinationForm>,
) -> Result<Success<DestinationResponse>, Error> {
    form.validate()?;

    let trip = fetch_trip(&database, form.trip_id).await?;

    let values = CreateDestinationValues {
        trip_id: trip.id,
        name: &form.name,
        country: form.country.as_deref(),
        arrival_date: form.arrival_date,
        departure_date: form.departure_date,
        notes: form.notes.as_deref(),
    };

    let destination = database
        .create_destination(&values)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!(
        "Created destination {} for trip {}",
        destination.id,
        destination.trip_id
    );

    Ok(Success::created(DestinationResponse::from_destination(
        destination,
    )))
}

/// Update destination form
///
/// A destination stays with its trip, there is no way to move it
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateDestinationForm {
    name: Patch<String>,
    country: Patch<String>,
    arrival_date: Patch<NaiveDate>,
    departure_date: Patch<NaiveDate>,
    notes: Patch<String>,
}

impl UpdateDestinationForm {
    fn validate(&self) -> Result<(), Error> {
        Violations::new()
            .required_text_patch("name", &self.name, 1, NAME_MAX_LENGTH)
            .text_patch("country", &self.country, COUNTRY_MAX_LENGTH)
            .finish()
    }
}

/// Update a destination based on the [`UpdateDestinationForm`](UpdateDestinationForm) form
pub async fn update(
    Extension(database): Extension<Database>,
    PathParameters(destination_id): PathParameters<i64>,
    Form(form): Form<UpdateDestinationForm>,
) -> Result<Success<DestinationResponse>, Error> {
    form.validate()?;

    let destination = fetch_destination(&database, destination_id).await?;

    let values = UpdateDestinationValues {
        name: form.name,
        country: form.country,
        arrival_date: form.arrival_date,
        departure_date: form.departure_date,
        notes: form.notes,
    };

    let destination = database
        .update_destination(&destination, values)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Destination not found")), Ok)?;

    tracing::debug!("Updated destination {}", destination.id);

    Ok(Success::ok(DestinationResponse::from_destination(
        destination,
    )))
}

/// Delete a destination
///
/// Itinerary items at this destination are kept, they lose their destination
pub async fn delete(
    Extension(database): Extension<Database>,
    PathParameters(destination_id): PathParameters<i64>,
) -> Result<Success<DestinationResponse>, Error> {
    let destination = fetch_destination(&database, destination_id).await?;

    database
        .delete_destination(&destination)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!("Deleted destination {}", destination.id);

    Ok(Success::no_content())
}

/// Query parameters of the catalog search
#[derive(Debug, Deserialize)]
pub struct SearchParameters {
    /// Part of a name or IATA code
    q: Option<String>,

    /// Part of a country name
    country: Option<String>,
}

/// Catalog search results
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchEntry>,
    pub total: usize,
}

/// Search the destination catalog
///
/// Request:
/// ```sh
/// curl -v 'http://localhost:8000/destinations/search?q=par&country=france'
/// ```
///
/// Response:
/// ```json
/// { "results": [ { "name": "Paris", "country": "France", "region": "Île-de-France", "iata": "CDG" } ], "total": 1 }
/// ```
pub async fn search(
    Extension(catalog): Extension<SearchCatalog>,
    QueryParameters(parameters): QueryParameters<SearchParameters>,
) -> Result<Success<SearchResponse>, Error> {
    let query = parameters.q.unwrap_or_default();

    Violations::new().length("q", &query, 1, usize::MAX).finish()?;

    let results = catalog
        .search(&query, parameters.country.as_deref())
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    Ok(Success::ok(SearchResponse {
        total: results.len(),
        results,
    }))
}
