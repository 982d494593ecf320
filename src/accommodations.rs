//! Accommodations

use chrono::naive::NaiveDate;
use chrono::naive::NaiveDateTime;

/// Lodging during a trip
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Accommodation {
    pub id: i64,
    pub trip_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,

    /// Reference of the booking at the provider
    pub booking_ref: Option<String>,

    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
