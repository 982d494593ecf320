//! Note storage

use crate::notes::Note;

use super::CreateNoteValues;
use super::Database;
use super::Page;
use super::Pagination;
use super::Result;
use super::UpdateNoteValues;
use super::UpdateStatement;
use super::connection_error;
use super::now;

impl Database {
    /// Find a page of notes, newest first, optionally only of a single trip
    pub async fn find_notes(&self, trip_id: Option<i64>, pagination: Pagination) -> Result<Page<Note>> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM notes
            WHERE (?1 IS NULL OR trip_id = ?1)
            ",
        )
        .bind(trip_id)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        let items = sqlx::query_as::<_, Note>(
            r"
            SELECT *
            FROM notes
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

    /// Find a single note by ID
    pub async fn find_single_note_by_id(&self, id: i64) -> Result<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r"
            SELECT *
            FROM notes
            WHERE id = ?1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(note)
    }

    /// Create a note
    pub async fn create_note(&self, values: &CreateNoteValues<'_>) -> Result<Note> {
        let note = sqlx::query_as::<_, Note>(
            r"
            INSERT INTO notes (trip_id, title, content, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING *
            ",
        )
        .bind(values.trip_id)
        .bind(values.title)
        .bind(values.content)
        .bind(now())
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(note)
    }

    /// Update a note with the provided values
    ///
    /// Only the provided columns are written, `updated_at` is always refreshed. `None` when the
    /// note no longer exists.
    pub async fn update_note(
        &self,
        note: &Note,
        values: UpdateNoteValues,
    ) -> Result<Option<Note>> {
        let mut statement = UpdateStatement::new("notes");
        statement
            .set_required("trip_id", values.trip_id)
            .set_required("title", values.title)
            .set("content", values.content);

        statement
            .fetch_optional(note.id, &self.connection_pool)
            .await
    }

    /// Delete a note
    pub async fn delete_note(&self, note: &Note) -> Result<()> {
        sqlx::query("DELETE FROM notes WHERE id = ?1")
            .bind(note.id)
            .execute(&self.connection_pool)
            .await
            .map_err(connection_error)?;

        Ok(())
    }
}
