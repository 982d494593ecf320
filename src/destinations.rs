use chrono::naive::NaiveDate;
use chrono::naive::NaiveDateTime;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Destination {
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
