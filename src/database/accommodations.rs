//! Accommodation storage

use crate::accommodations::Accommodation;

use super::CreateAccommodationValues;
use super::Database;
use super::Page;
use super::Pagination;
use super::Result;
use super::UpdateAccommodationValues;
use super::UpdateStatement;
use super::connection_error;
use super::now;

impl Database {
    /// Find a page of accommodations, newest first, optionally only of a single trip
    pub async fn find_accommodations(
        &self,
        trip_id: Option<i64>,
        pagination: Pagination,
    ) -> Result<Page<Accommodation>> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM accommodations
            WHERE (?1 IS NULL OR trip_id = ?1)
            ",
        )
        .bind(trip_id)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        let items = sqlx::query_as::<_, Accommodation>(
            r"
            SELECT *
            FROM accommodations
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

    /// Find a single accommodation by ID
    pub async fn find_single_accommodation_by_id(&self, id: i64) -> Result<Option<Accommodation>> {
        let accommodation = sqlx::query_as::<_, Accommodation>(
            r"
            SELECT *
            FROM accommodations
            WHERE id = ?1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(accommodation)
    }

    /// Create an accommodation
    pub async fn create_accommodation(
        &self,
        values: &CreateAccommodationValues<'_>,
    ) -> Result<Accommodation> {
        let accommodation = sqlx::query_as::<_, Accommodation>(
            r"
            INSERT INTO accommodations (
                trip_id,
                name,
                address,
                check_in,
                check_out,
                booking_ref,
                notes,
                created_at,
                updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
            RETURNING *
            ",
        )
        .bind(values.trip_id)
        .bind(values.name)
        .bind(values.address)
        .bind(values.check_in)
        .bind(values.check_out)
        .bind(values.booking_ref)
        .bind(values.notes)
        .bind(now())
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(accommodation)
    }

    /// Update an accommodation with the provided values
    ///
    /// Only the provided columns are written, `updated_at` is always refreshed. `None` when the
    /// accommodation no longer exists.
    pub async fn update_accommodation(
        &self,
        accommodation: &Accommodation,
        values: UpdateAccommodationValues,
    ) -> Result<Option<Accommodation>> {
        let mut statement = UpdateStatement::new("accommodations");
        statement
            .set_required("trip_id", values.trip_id)
            .set_required("name", values.name)
            .set("address", values.address)
            .set("check_in", values.check_in)
            .set("check_out", values.check_out)
            .set("booking_ref", values.booking_ref)
            .set("notes", values.notes);

        statement
            .fetch_optional(accommodation.id, &self.connection_pool)
            .await
    }

    /// Delete an accommodation
    pub async fn delete_accommodation(&self, accommodation: &Accommodation) -> Result<()> {
        sqlx::query("DELETE FROM accommodations WHERE id = ?1")
            .bind(accommodation.id)
            .execute(&self.connection_pool)
            .await
            .map_err(connection_error)?;

        Ok(())
    }
}
