//! Transports

use chrono::naive::NaiveDate;
use chrono::naive::NaiveDateTime;

/// Getting from one place to another during a trip
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Transport {
    /// Transport ID
    pub id: i64,

    /// Trip the transport belongs to
    pub trip_id: i64,

    /// Kind of transport: flight, train, car, bus, ...
    #[sqlx(rename = "type")]
    pub transport_type: String,

    /// Airline, rail company, rental agency, ...
    pub provider: Option<String>,

    pub departure_location: Option<String>,
    pub arrival_location: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub arrival_date: Option<NaiveDate>,

    /// Reference of the booking at the provider
    pub booking_ref: Option<String>,

    /// Free form notes
    pub notes: Option<String>,

    /// Creation date
    pub created_at: NaiveDateTime,

    /// Last updated at
    pub updated_at: NaiveDateTime,
}
