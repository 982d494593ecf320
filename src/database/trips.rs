//! Trip storage

use crate::trips::Trip;

use super::CreateTripValues;
use super::Database;
use super::Page;
use super::Pagination;
use super::Result;
use super::UpdateStatement;
use super::UpdateTripValues;
use super::connection_error;
use super::now;

/// Statements removing everything that belongs to a trip
///
/// Itinerary items go first, they may still point at one of the destinations
const CASCADE_STATEMENTS: [&str; 5] = [
    "DELETE FROM itinerary_items WHERE trip_id = ?1",
    "DELETE FROM destinations WHERE trip_id = ?1",
    "DELETE FROM accommodations WHERE trip_id = ?1",
    "DELETE FROM transports WHERE trip_id = ?1",
    "DELETE FROM notes WHERE trip_id = ?1",
];

impl Database {
    /// Find a page of trips, newest first
    pub async fn find_trips(&self, pagination: Pagination) -> Result<Page<Trip>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trips")
            .fetch_one(&self.connection_pool)
            .await
            .map_err(connection_error)?;

        let items = sqlx::query_as::<_, Trip>(
            r"
            SELECT *
            FROM trips
            ORDER BY created_at DESC, id DESC
            LIMIT ?1 OFFSET ?2
            ",
        )
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(Page { items, total })
    }

    /// Find a single trip by ID
    pub async fn find_single_trip_by_id(&self, id: i64) -> Result<Option<Trip>> {
        let trip = sqlx::query_as::<_, Trip>(
            r"
            SELECT *
            FROM trips
            WHERE id = ?1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(trip)
    }

    /// Create a trip
    pub async fn create_trip(&self, values: &CreateTripValues<'_>) -> Result<Trip> {
        let trip = sqlx::query_as::<_, Trip>(
            r"
            INSERT INTO trips (name, description, start_date, end_date, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            RETURNING *
            ",
        )
        .bind(values.name)
        .bind(values.description)
        .bind(values.start_date)
        .bind(values.end_date)
        .bind(now())
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(trip)
    }

    /// Update a trip with the provided values
    ///
    /// Only the provided columns are written, `updated_at` is always refreshed. `None` when the
    /// trip no longer exists.
    pub async fn update_trip(
        &self,
        trip: &Trip,
        values: UpdateTripValues,
    ) -> Result<Option<Trip>> {
        let mut statement = UpdateStatement::new("trips");
        statement
            .set_required("name", values.name)
            .set("description", values.description)
            .set("start_date", values.start_date)
            .set("end_date", values.end_date);

        statement
            .fetch_optional(trip.id, &self.connection_pool)
            .await
    }

    /// Delete a trip together with its destinations, itinerary items, accommodations,
    /// transports and notes
    pub async fn delete_trip(&self, trip: &Trip) -> Result<()> {
        let mut transaction = self
            .connection_pool
            .begin()
            .await
            .map_err(connection_error)?;

        for statement in CASCADE_STATEMENTS {
            sqlx::query(statement)
                .bind(trip.id)
                .execute(&mut *transaction)
                .await
                .map_err(connection_error)?;
        }

        sqlx::query("DELETE FROM trips WHERE id = ?1")
            .bind(trip.id)
            .execute(&mut *transaction)
            .await
            .map_err(connection_error)?;

        transaction.commit().await.map_err(connection_error)?;

        Ok(())
    }
}
