//! Form types
//!
//! Create values borrow from the validated request, update values own their patches so only
//! the provided columns get written

use chrono::NaiveDate;

use crate::patch::Patch;

/// Offset/limit window over an ordered list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// Amount of rows to skip
    pub offset: i64,

    /// Maximum amount of rows to return
    pub limit: i64,
}

/// A single page of rows
#[derive(Debug)]
pub struct Page<T> {
    /// Rows within the requested window
    pub items: Vec<T>,

    /// Total amount of rows matching the filter, regardless of the window
    pub total: i64,
}

/// Filter for itinerary items, both are exact matches when set
#[derive(Clone, Copy, Debug, Default)]
pub struct ItineraryItemFilter {
    /// Only items of this trip
    pub trip_id: Option<i64>,

    /// Only items at this destination
    pub destination_id: Option<i64>,
}

/// Values to create a Trip
pub struct CreateTripValues<'a> {
    /// Name of the trip
    pub name: &'a str,

    /// Description of the trip
    pub description: Option<&'a str>,

    /// First day
    pub start_date: Option<NaiveDate>,

    /// Last day
    pub end_date: Option<NaiveDate>,
}

/// Values to update a Trip
#[derive(Debug, Default)]
pub struct UpdateTripValues {
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub start_date: Patch<NaiveDate>,
    pub end_date: Patch<NaiveDate>,
}

/// Values to create a Destination
pub struct CreateDestinationValues<'a> {
    /// The trip to attach the destination to, must exist
    pub trip_id: i64,

    pub name: &'a str,
    pub country: Option<&'a str>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub notes: Option<&'a str>,
}

/// Values to update a Destination
///
/// A destination can not move to another trip
#[derive(Debug, Default)]
pub struct UpdateDestinationValues {
    pub name: Patch<String>,
    pub country: Patch<String>,
    pub arrival_date: Patch<NaiveDate>,
    pub departure_date: Patch<NaiveDate>,
    pub notes: Patch<String>,
}

/// Values to create an ItineraryItem
pub struct CreateItineraryItemValues<'a> {
    /// The trip to attach the item to, must exist
    pub trip_id: i64,

    /// Destination of the same trip, must exist when set
    pub destination_id: Option<i64>,

    pub title: &'a str,
    pub description: Option<&'a str>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<&'a str>,
    pub end_time: Option<&'a str>,
    pub location: Option<&'a str>,
    pub cost: Option<f64>,
}

/// Values to update an ItineraryItem
#[derive(Debug, Default)]
pub struct UpdateItineraryItemValues {
    pub trip_id: Patch<i64>,
    pub destination_id: Patch<i64>,
    pub title: Patch<String>,
    pub description: Patch<String>,
    pub date: Patch<NaiveDate>,
    pub start_time: Patch<String>,
    pub end_time: Patch<String>,
    pub location: Patch<String>,
    pub cost: Patch<f64>,
}

/// Values to create an Accommodation
pub struct CreateAccommodationValues<'a> {
    /// The trip to attach the accommodation to, must exist
    pub trip_id: i64,

    pub name: &'a str,
    pub address: Option<&'a str>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub booking_ref: Option<&'a str>,
    pub notes: Option<&'a str>,
}

/// Values to update an Accommodation
#[derive(Debug, Default)]
pub struct UpdateAccommodationValues {
    pub trip_id: Patch<i64>,
    pub name: Patch<String>,
    pub address: Patch<String>,
    pub check_in: Patch<NaiveDate>,
    pub check_out: Patch<NaiveDate>,
    pub booking_ref: Patch<String>,
    pub notes: Patch<String>,
}

/// Values to create a Transport
pub struct CreateTransportValues<'a> {
    /// The trip to attach the transport to, must exist
    pub trip_id: i64,

    /// Kind of transport
    pub transport_type: &'a str,

    pub provider: Option<&'a str>,
    pub departure_location: Option<&'a str>,
    pub arrival_location: Option<&'a str>,
    pub departure_date: Option<NaiveDate>,
    pub arrival_date: Option<NaiveDate>,
    pub booking_ref: Option<&'a str>,
    pub notes: Option<&'a str>,
}

/// Values to update a Transport
#[derive(Debug, Default)]
pub struct UpdateTransportValues {
    pub trip_id: Patch<i64>,
    pub transport_type: Patch<String>,
    pub provider: Patch<String>,
    pub departure_location: Patch<String>,
    pub arrival_location: Patch<String>,
    pub departure_date: Patch<NaiveDate>,
    pub arrival_date: Patch<NaiveDate>,
    pub booking_ref: Patch<String>,
    pub notes: Patch<String>,
}

/// Values to create a Note
pub struct CreateNoteValues<'a> {
    /// The trip to attach the note to, must exist
    pub trip_id: i64,

    /// Title of the note
    pub title: &'a str,

    /// Content of the note
    ///
    /// Can be anything
    pub content: Option<&'a str>,
}

/// Values to update a Note
#[derive(Debug, Default)]
pub struct UpdateNoteValues {
    pub trip_id: Patch<i64>,
    pub title: Patch<String>,
    pub content: Patch<String>,
}
