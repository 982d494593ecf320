//! Transport API endpoints
//!
//! Flights, trains and any other way of getting around during a trip

use axum::Extension;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::database::CreateTransportValues;
use crate::database::Database;
use crate::database::UpdateTransportValues;
use crate::patch::Patch;
use crate::transports::Transport;

use super::Error;
use super::Form;
use super::PathParameters;
use super::QueryParameters;
use super::Success;
use super::pagination::ListParameters;
use super::pagination::PageResponse;
use super::utils::ensure_trip_exists;
use super::utils::fetch_transport;
use super::utils::fetch_trip;
use super::validation::NAME_MAX_LENGTH;
use super::validation::Violations;

const TYPE_MAX_LENGTH: usize = 100;
const BOOKING_REF_MAX_LENGTH: usize = 100;

/// Transport response going to the user
#[derive(Debug, Serialize)]
pub struct TransportResponse {
    pub id: i64,
    pub trip_id: i64,

    /// Kind of transport, like `flight` or `train`
    #[serde(rename = "type")]
    pub transport_type: String,

    pub provider: Option<String>,
    pub departure_location: Option<String>,
    pub arrival_location: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub arrival_date: Option<NaiveDate>,
    pub booking_ref: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TransportResponse {
    fn from_transport(transport: Transport) -> Self {
        Self {
            id: transport.id,
            trip_id: transport.trip_id,
            transport_type: transport.transport_type,
            provider: transport.provider,
            departure_location: transport.departure_location,
            arrival_location: transport.arrival_location,
            departure_date: transport.departure_date,
            arrival_date: transport.arrival_date,
            booking_ref: transport.booking_ref,
            notes: transport.notes,
            created_at: transport.created_at,
            updated_at: transport.updated_at,
        }
    }
}

/// List transport, optionally of a single trip
pub async fn list(
    Extension(database): Extension<Database>,
    QueryParameters(parameters): QueryParameters<ListParameters>,
) -> Result<Success<PageResponse<TransportResponse>>, Error> {
    let pagination = parameters.pagination()?;

    let page = database
        .find_transports(parameters.trip_id, pagination)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(PageResponse::from_page(
        page,
        pagination,
        TransportResponse::from_transport,
    )))
}

/// Get a single transport
pub async fn single(
    Extension(database): Extension<Database>,
    PathParameters(transport_id): PathParameters<i64>,
) -> Result<Success<TransportResponse>, Error> {
    fetch_transport(&database, transport_id)
        .await
        .map(|transport| Success::ok(TransportResponse::from_transport(transport)))
}

/// Create transport form
#[derive(Debug, Deserialize)]
pub struct CreateTransportForm {
    trip_id: i64,

    #[serde(rename = "type")]
    transport_type: String,

    provider: Option<String>,
    departure_location: Option<String>,
    arrival_location: Option<String>,
    departure_date: Option<NaiveDate>,
    arrival_date: Option<NaiveDate>,
    booking_ref: Option<String>,
    notes: Option<String>,
}

impl CreateTransportForm {
    fn validate(&self) -> Result<(), Error> {
        Violations::new()
            .id("trip_id", self.trip_id)
            .length("type", &self.transport_type, 1, TYPE_MAX_LENGTH)
            .optional_length("provider", self.provider.as_deref(), NAME_MAX_LENGTH)
            .optional_length(
                "departure_location",
                self.departure_location.as_deref(),
                NAME_MAX_LENGTH,
            )
            .optional_length(
                "arrival_location",
                self.arrival_location.as_deref(),
                NAME_MAX_LENGTH,
            )
            .optional_length(
                "booking_ref",
                self.booking_ref.as_deref(),
                BOOKING_REF_MAX_LENGTH,
            )
            .finish()
    }
}

/// Create a transport based on the [`CreateTransportForm`](CreateTransportForm) form
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "trip_id": 1, "type": "flight", "provider": "JAL", "departure_location": "AMS" }' \
///     http://localhost:8000/transport
/// ```
///
/// Response
/// ```json
/// { "id": 1, "trip_id": 1, "type": "flight", "provider": "JAL" ... }
/// ```
pub async fn create(
    Extension(database): Extension<Database>,
    Form(form): Form<CreateTransportForm>,
) -> Result<Success<TransportResponse>, Error> {
    form.validate()?;

    let trip = fetch_trip(&database, form.trip_id).await?;

    let values = CreateTransportValues {
        trip_id: trip.id,
        transport_type: &form.transport_type,
        provider: form.provider.as_deref(),
        departure_location: form.departure_location.as_deref(),
        arrival_location: form.arrival_location.as_deref(),
        departure_date: form.departure_date,
        arrival_date: form.arrival_date,
        booking_ref: form.booking_ref.as_deref(),
        notes: form.notes.as_deref(),
    };

    let transport = database
        .create_transport(&values)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!(
        "Created transport {} for trip {}",
        transport.id,
        transport.trip_id
    );

    Ok(Success::created(TransportResponse::from_transport(
        transport,
    )))
}

/// Update transport form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTransportForm {
    trip_id: Patch<i64>,

    #[serde(rename = "type")]
    transport_type: Patch<String>,

    provider: Patch<String>,
    departure_location: Patch<String>,
    arrival_location: Patch<String>,
    departure_date: Patch<NaiveDate>,
    arrival_date: Patch<NaiveDate>,
    booking_ref: Patch<String>,
    notes: Patch<String>,
}

impl UpdateTransportForm {
    fn validate(&self) -> Result<(), Error> {
        Violations::new()
            .required_id_patch("trip_id", &self.trip_id)
            .required_text_patch("type", &self.transport_type, 1, TYPE_MAX_LENGTH)
            .text_patch("provider", &self.provider, NAME_MAX_LENGTH)
            .text_patch("departure_location", &self.departure_location, NAME_MAX_LENGTH)
            .text_patch("arrival_location", &self.arrival_location, NAME_MAX_LENGTH)
            .text_patch("booking_ref", &self.booking_ref, BOOKING_REF_MAX_LENGTH)
            .finish()
    }
}

/// Update a transport based on the [`UpdateTransportForm`](UpdateTransportForm) form
pub async fn update(
    Extension(database): Extension<Database>,
    PathParameters(transport_id): PathParameters<i64>,
    Form(form): Form<UpdateTransportForm>,
) -> Result<Success<TransportResponse>, Error> {
    form.validate()?;

    let transport = fetch_transport(&database, transport_id).await?;

    ensure_trip_exists(&database, form.trip_id.value()).await?;

    let values = UpdateTransportValues {
        trip_id: form.trip_id,
        transport_type: form.transport_type,
        provider: form.provider,
        departure_location: form.departure_location,
        arrival_location: form.arrival_location,
        departure_date: form.departure_date,
        arrival_date: form.arrival_date,
        booking_ref: form.booking_ref,
        notes: form.notes,
    };

    let transport = database
        .update_transport(&transport, values)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Transport not found")), Ok)?;

    tracing::debug!("Updated transport {}", transport.id);

    Ok(Success::ok(TransportResponse::from_transport(transport)))
}

/// Delete a transport
pub async fn delete(
    Extension(database): Extension<Database>,
    PathParameters(transport_id): PathParameters<i64>,
) -> Result<Success<TransportResponse>, Error> {
    let transport = fetch_transport(&database, transport_id).await?;

    database
        .delete_transport(&transport)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!("Deleted transport {}", transport.id);

    Ok(Success::no_content())
}
