//! Transport storage

use crate::transports::Transport;

use super::CreateTransportValues;
use super::Database;
use super::Page;
use super::Pagination;
use super::Result;
use super::UpdateStatement;
use super::UpdateTransportValues;
use super::connection_error;
use super::now;

impl Database {
    /// Find a page of transports, newest first, optionally only of a single trip
    pub async fn find_transports(
        &self,
        trip_id: Option<i64>,
        pagination: Pagination,
    ) -> Result<Page<Transport>> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM transports
            WHERE (?1 IS NULL OR trip_id = ?1)
            ",
        )
        .bind(trip_id)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        let items = sqlx::query_as::<_, Transport>(
            r"
            SELECT *
            FROM transports
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

    /// Find a single transport by ID
    pub async fn find_single_transport_by_id(&self, id: i64) -> Result<Option<Transport>> {
        let transport = sqlx::query_as::<_, Transport>(
            r"
            SELECT *
            FROM transports
            WHERE id = ?1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(transport)
    }

    /// Create a transport
    pub async fn create_transport(&self, values: &CreateTransportValues<'_>) -> Result<Transport> {
        let transport = sqlx::query_as::<_, Transport>(
            r"
            INSERT INTO transports (
                trip_id,
                type,
                provider,
                departure_location,
                arrival_location,
                departure_date,
                arrival_date,
                booking_ref,
                notes,
                created_at,
                updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)
            RETURNING *
            ",
        )
        .bind(values.trip_id)
        .bind(values.transport_type)
        .bind(values.provider)
        .bind(values.departure_location)
        .bind(values.arrival_location)
        .bind(values.departure_date)
        .bind(values.arrival_date)
        .bind(values.booking_ref)
        .bind(values.notes)
        .bind(now())
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(transport)
    }

    /// Update a transport with the provided values
    ///
    /// Only the provided columns are written, `updated_at` is always refreshed. `None` when the
    /// transport no longer exists.
    pub async fn update_transport(
        &self,
        transport: &Transport,
        values: UpdateTransportValues,
    ) -> Result<Option<Transport>> {
        let mut statement = UpdateStatement::new("transports");
        statement
            .set_required("trip_id", values.trip_id)
            .set_required("type", values.transport_type)
            .set("provider", values.provider)
            .set("departure_location", values.departure_location)
            .set("arrival_location", values.arrival_location)
            .set("departure_date", values.departure_date)
            .set("arrival_date", values.arrival_date)
            .set("booking_ref", values.booking_ref)
            .set("notes", values.notes);

        statement
            .fetch_optional(transport.id, &self.connection_pool)
            .await
    }

    /// Delete a transport
    pub async fn delete_transport(&self, transport: &Transport) -> Result<()> {
        sqlx::query("DELETE FROM transports WHERE id = ?1")
            .bind(transport.id)
            .execute(&self.connection_pool)
            .await
            .map_err(connection_error)?;

        Ok(())
    }
}
