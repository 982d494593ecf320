//! Itinerary item storage

use crate::itinerary_items::ItineraryItem;

use super::CreateItineraryItemValues;
use super::Database;
use super::ItineraryItemFilter;
use super::Page;
use super::Pagination;
use super::Result;
use super::UpdateItineraryItemValues;
use super::UpdateStatement;
use super::connection_error;
use super::now;

impl Database {
    /// Find a page of itinerary items, newest first
    pub async fn find_itinerary_items(
        &self,
        filter: ItineraryItemFilter,
        pagination: Pagination,
    ) -> Result<Page<ItineraryItem>> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM itinerary_items
            WHERE (?1 IS NULL OR trip_id = ?1)
                AND (?2 IS NULL OR destination_id = ?2)
            ",
        )
        .bind(filter.trip_id)
        .bind(filter.destination_id)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        let items = sqlx::query_as::<_, ItineraryItem>(
            r"
            SELECT *
            FROM itinerary_items
            WHERE (?1 IS NULL OR trip_id = ?1)
                AND (?2 IS NULL OR destination_id = ?2)
            ORDER BY created_at DESC, id DESC
            LIMIT ?3 OFFSET ?4
            ",
        )
        .bind(filter.trip_id)
        .bind(filter.destination_id)
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(Page { items, total })
    }

    /// Find a single itinerary item by ID
    pub async fn find_single_itinerary_item_by_id(&self, id: i64) -> Result<Option<ItineraryItem>> {
        let item = sqlx::query_as::<_, ItineraryItem>(
            r"
            SELECT *
            FROM itinerary_items
            WHERE id = ?1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(item)
    }

    /// Create an itinerary item
    ///
    /// The trip, and the destination when set, are expected to exist
    pub async fn create_itinerary_item(
        &self,
        values: &CreateItineraryItemValues<'_>,
    ) -> Result<ItineraryItem> {
        let item = sqlx::query_as::<_, ItineraryItem>(
            r"
            INSERT INTO itinerary_items (
                trip_id,
                destination_id,
                title,
                description,
                date,
                start_time,
                end_time,
                location,
                cost,
                created_at,
                updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)
            RETURNING *
            ",
        )
        .bind(values.trip_id)
        .bind(values.destination_id)
        .bind(values.title)
        .bind(values.description)
        .bind(values.date)
        .bind(values.start_time)
        .bind(values.end_time)
        .bind(values.location)
        .bind(values.cost)
        .bind(now())
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(item)
    }

    /// Update an itinerary item with the provided values
    ///
    /// Only the provided columns are written, `updated_at` is always refreshed. `None` when the
    /// itinerary item no longer exists.
    pub async fn update_itinerary_item(
        &self,
        item: &ItineraryItem,
        values: UpdateItineraryItemValues,
    ) -> Result<Option<ItineraryItem>> {
        let mut statement = UpdateStatement::new("itinerary_items");
        statement
            .set_required("trip_id", values.trip_id)
            .set("destination_id", values.destination_id)
            .set_required("title", values.title)
            .set("description", values.description)
            .set("date", values.date)
            .set("start_time", values.start_time)
            .set("end_time", values.end_time)
            .set("location", values.location)
            .set("cost", values.cost);

        statement
            .fetch_optional(item.id, &self.connection_pool)
            .await
    }

    /// Delete an itinerary item
    pub async fn delete_itinerary_item(&self, item: &ItineraryItem) -> Result<()> {
        sqlx::query("DELETE FROM itinerary_items WHERE id = ?1")
            .bind(item.id)
            .execute(&self.connection_pool)
            .await
            .map_err(connection_error)?;

        Ok(())
    }
}
