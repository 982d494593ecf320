//! Itinerary items
//!
//! Activities and events of a trip, optionally tied to one of its destinations

use chrono::naive::NaiveDate;
use chrono::naive::NaiveDateTime;

/// Single entry on the itinerary of a trip
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct ItineraryItem {
    /// Itinerary item ID
    pub id: i64,

    /// Trip the item belongs to
    pub trip_id: i64,

    /// Destination the item takes place at
    ///
    /// Cleared when that destination is deleted, the item itself stays
    pub destination_id: Option<i64>,

    /// Title of the item
    pub title: String,

    /// Free form description
    pub description: Option<String>,

    /// Day of the item
    pub date: Option<NaiveDate>,

    /// Local start time, `HH:MM`
    pub start_time: Option<String>,

    /// Local end time, `HH:MM`
    pub end_time: Option<String>,

    /// Where it takes place
    pub location: Option<String>,

    /// Estimated cost
    pub cost: Option<f64>,

    /// Creation date
    pub created_at: NaiveDateTime,

    /// Last updated at
    pub updated_at: NaiveDateTime,
}
