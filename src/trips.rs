//! Trips
//!
//! The root of everything, all other records belong to a trip

use chrono::naive::NaiveDate;
use chrono::naive::NaiveDateTime;

/// A travel plan
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Trip {
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
