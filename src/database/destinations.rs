//! Destination storage

use crate::destinations::Destination;

use super::CreateDestinationValues;
use super::Database;
use super::Page;
use super::Pagination;
use super::Result;
use super::UpdateDestinationValues;
use super::UpdateStatement;
use super::connection_error;
use super::now;

impl Database {
    /// Find a page of destinations, newest first, optionally only of a single trip
    pub async fn find_destinations(
        &self,
        trip_id: Option<i64>,
        pagination: Pagination,
    ) -> Result<Page<Destination>> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM destinations
            WHERE (?1 IS NULL OR trip_id = ?1)
            ",
        )
        .bind(trip_id)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        let items = sqlx::query_as::<_, Destination>(
            r"
            SELECT *
            FROM destinations
            WHERE (?1 IS NULL OR trip_id = ?1)
            ORDER BY created_at DESC, id DESC
            LIMIT ?2 OFFSET ?3
            ",
        )
        .bind(trip_id)
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(Page { items, total })
    }

    /// Find a single destination by ID
    pub async fn find_single_destination_by_id(&self, id: i64) -> Result<Option<Destination>> {
        let destination = sqlx::query_as::<_, Destination>(
            r"
            SELECT *
            FROM destinations
            WHERE id = ?1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(destination)
    }

    /// Create a destination
    ///
    /// The trip is expected to exist
    pub async fn create_destination(
        &self,
        values: &CreateDestinationValues<'_>,
    ) -> Result<Destination> {
        let destination = sqlx::query_as::<_, Destination>(
            r"
            INSERT INTO destinations (
                trip_id, name, country, arrival_date, departure_date, notes, created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
            RETURNING *
            ",
        )
        .bind(values.trip_id)
        .bind(values.name)
        .bind(values.country)
        .bind(values.arrival_date)
        .bind(values.departure_date)
        .bind(values.notes)
        .bind(now())
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(destination)
    }

    /// Update a destination with the provided values
    ///
    /// Only the provided columns are written, `updated_at` is always refreshed. `None` when the
    /// destination no longer exists.
    pub async fn update_destination(
        &self,
        destination: &Destination,
        values: UpdateDestinationValues,
    ) -> Result<Option<Destination>> {
        let mut statement = UpdateStatement::new("destinations");
        statement
            .set_required("name", values.name)
            .set("country", values.country)
            .set("arrival_date", values.arrival_date)
            .set("departure_date", values.departure_date)
            .set("notes", values.notes);

        statement
            .fetch_optional(destination.id, &self.connection_pool)
            .await
    }

    /// Delete a destination
    ///
    /// Itinerary items at this destination are kept, their reference is cleared
    pub async fn delete_destination(&self, destination: &Destination) -> Result<()> {
        let mut transaction = self
            .connection_pool
            .begin()
            .await
            .map_err(connection_error)?;

        sqlx::query("UPDATE itinerary_items SET destination_id = NULL WHERE destination_id = ?1")
            .bind(destination.id)
            .execute(&mut *transaction)
            .await
            .map_err(connection_error)?;

        sqlx::query("DELETE FROM destinations WHERE id = ?1")
            .bind(destination.id)
            .execute(&mut *transaction)
            .await
            .map_err(connection_error)?;

        transaction.commit().await.map_err(connection_error)?;

        Ok(())
    }
}
