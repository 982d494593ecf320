//! Accommodations API endpoints

use axum::Extension;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::accommodations::Accommodation;
use crate::database::CreateAccommodationValues;
use crate::database::Database;
use crate::database::UpdateAccommodationValues;
use crate::patch::Patch;

use super::Error;
use super::Form;
use super::PathParameters;
use super::QueryParameters;
use super::Success;
use super::pagination::ListParameters;
use super::pagination::PageResponse;
use super::utils::ensure_trip_exists;
use super::utils::fetch_accommodation;
use super::utils::fetch_trip;
use super::validation::NAME_MAX_LENGTH;
use super::validation::Violations;

const ADDRESS_MAX_LENGTH: usize = 255;
const BOOKING_REF_MAX_LENGTH: usize = 100;

/// Accommodation response going to the user
#[derive(Debug, Serialize)]
pub struct AccommodationResponse {
    pub id: i64,
    pub trip_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub booking_ref: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl AccommodationResponse {
    fn from_accommodation(accommodation: Accommodation) -> Self {
        Self {
            id: accommodation.id,
            trip_id: accommodation.trip_id,
            name: accommodation.name,
            address: accommodation.address,
            check_in: accommodation.check_in,
            check_out: accommodation.check_out,
            booking_ref: accommodation.booking_ref,
            notes: accommodation.notes,
            created_at: accommodation.created_at,
            updated_at: accommodation.updated_at,
        }
    }
}

/// List accommodations, optionally of a single trip
pub async fn list(
    Extension(database): Extension<Database>,
    QueryParameters(parameters): QueryParameters<ListParameters>,
) -> Result<Success<PageResponse<AccommodationResponse>>, Error> {
    let pagination = parameters.pagination()?;

    let page = database
        .find_accommodations(parameters.trip_id, pagination)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(PageResponse::from_page(
        page,
        pagination,
        AccommodationResponse::from_accommodation,
    )))
}

/// Get a single accommodation
pub async fn single(
    Extension(database): Extension<Database>,
    PathParameters(accommodation_id): PathParameters<i64>,
) -> Result<Success<AccommodationResponse>, Error> {
    fetch_accommodation(&database, accommodation_id)
        .await
        .map(|accommodation| Success::ok(AccommodationResponse::from_accommodation(accommodation)))
}

/// Create accommodation form
#[derive(Debug, Deserialize)]
pub struct CreateAccommodationForm {
    trip_id: i64,
    name: String,
    address: Option<String>,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,

    /// Reservation number of the booking
    booking_ref: Option<String>,

    notes: Option<String>,
}

impl CreateAccommodationForm {
    fn validate(&self) -> Result<(), Error> {
        Violations::new()
            .id("trip_id", self.trip_id)
            .length("name", &self.name, 1, NAME_MAX_LENGTH)
            .optional_length("address", self.address.as_deref(), ADDRESS_MAX_LENGTH)
            .optional_length(
                "booking_ref",
                self.booking_ref.as_deref(),
                BOOKING_REF_MAX_LENGTH,
            )
            .finish()
    }
}

/// Create an accommodation based on the [`CreateAccommodationForm`](CreateAccommodationForm)
/// form
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "trip_id": 1, "name": "Ryokan", "check_in": "2024-04-02", "check_out": "2024-04-05" }' \
///     http://localhost:8000/accommodations
/// ```
pub async fn create(
    Extension(database): Extension<Database>,
    Form(form): Form<CreateAccommodationForm>,
) -> Result<Success<AccommodationResponse>, Error> {
    form.validate()?;

    let trip = fetch_trip(&database, form.trip_id).await?;

    let values = CreateAccommodationValues {
        trip_id: trip.id,
        name: &form.name,
        address: form.address.as_deref(),
        check_in: form.check_in,
        check_out: form.check_out,
        booking_ref: form.booking_ref.as_deref(),
        notes: form.notes.as_deref(),
    };

    let accommodation = database
        .create_accommodation(&values)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!(
        "Created accommodation {} for trip {}",
        accommodation.id,
        accommodation.trip_id
    );

    Ok(Success::created(AccommodationResponse::from_accommodation(
        accommodation,
    )))
}

/// Update accommodation form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateAccommodationForm {
    /// Move the accommodation to another trip
    trip_id: Patch<i64>,

    name: Patch<String>,
    address: Patch<String>,
    check_in: Patch<NaiveDate>,
    check_out: Patch<NaiveDate>,
    booking_ref: Patch<String>,
    notes: Patch<String>,
}

impl UpdateAccommodationForm {
    fn validate(&self) -> Result<(), Error> {
        Violations::new()
            .required_id_patch("trip_id", &self.trip_id)
            .required_text_patch("name", &self.name, 1, NAME_MAX_LENGTH)
            .text_patch("address", &self.address, ADDRESS_MAX_LENGTH)
            .text_patch("booking_ref", &self.booking_ref, BOOKING_REF_MAX_LENGTH)
            .finish()
    }
}

/// Update an accommodation based on the [`UpdateAccommodationForm`](UpdateAccommodationForm)
/// form
pub async fn update(
    Extension(database): Extension<Database>,
    PathParameters(accommodation_id): PathParameters<i64>,
    Form(form): Form<UpdateAccommodationForm>,
) -> Result<Success<AccommodationResponse>, Error> {
    form.validate()?;

    let accommodation = fetch_accommodation(&database, accommodation_id).await?;

    ensure_trip_exists(&database, form.trip_id.value()).await?;

    let values = UpdateAccommodationValues {
        trip_id: form.trip_id,
        name: form.name,
        address: form.address,
        check_in: form.check_in,
        check_out: form.check_out,
        booking_ref: form.booking_ref,
        notes: form.notes,
    };

    let accommodation = database
        .update_accommodation(&accommodation, values)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Accommodation not found")), Ok)?;

    tracing::debug!("Updated accommodation {}", accommodation.id);

    Ok(Success::ok(AccommodationResponse::from_accommodation(
        accommodation,
    )))
}

/// Delete an accommodation
pub async fn delete(
    Extension(database): Extension<Database>,
    PathParameters(accommodation_id): PathParameters<i64>,
) -> Result<Success<AccommodationResponse>, Error> {
    let accommodation = fetch_accommodation(&database, accommodation_id).await?;

    database
        .delete_accommodation(&accommodation)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!("Deleted accommodation {}", accommodation.id);

    Ok(Success::no_content())
}
