//! Notes API endpoints

use axum::Extension;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::database::CreateNoteValues;
use crate::database::Database;
use crate::database::UpdateNoteValues;
use crate::notes::Note;
use crate::patch::Patch;

use super::Error;
use super::Form;
use super::PathParameters;
use super::QueryParameters;
use super::Success;
use super::pagination::ListParameters;
use super::pagination::PageResponse;
use super::utils::ensure_trip_exists;
use super::utils::fetch_note;
use super::utils::fetch_trip;
use super::validation::NAME_MAX_LENGTH;
use super::validation::Violations;

/// Note response going to the user
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: i64,
    pub trip_id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NoteResponse {
    fn from_note(note: Note) -> Self {
        Self {
            id: note.id,
            trip_id: note.trip_id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

pub async fn list(
    Extension(database): Extension<Database>,
    QueryParameters(parameters): QueryParameters<ListParameters>,
) -> Result<Success<PageResponse<NoteResponse>>, Error> {
    let pagination = parameters.pagination()?;

    let page = database
        .find_notes(parameters.trip_id, pagination)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(PageResponse::from_page(
        page,
        pagination,
        NoteResponse::from_note,
    )))
}

pub async fn single(
    Extension(database): Extension<Database>,
    PathParameters(note_id): PathParameters<i64>,
) -> Result<Success<NoteResponse>, Error> {
    fetch_note(&database, note_id)
        .await
        .map(|note| Success::ok(NoteResponse::from_note(note)))
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteForm {
    trip_id: i64,
    title: String,
    content: Option<String>,
}

/// Create a note for a trip
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "trip_id": 1, "title": "Packing", "content": "Adapter plug" }' \
///     http://localhost:8000/notes
/// ```
pub async fn create(
    Extension(database): Extension<Database>,
    Form(form): Form<CreateNoteForm>,
) -> Result<Success<NoteResponse>, Error> {
    Violations::new()
        .id("trip_id", form.trip_id)
        .length("title", &form.title, 1, NAME_MAX_LENGTH)
        .finish()?;

    let trip = fetch_trip(&database, form.trip_id).await?;

    let values = CreateNoteValues {
        trip_id: trip.id,
        title: &form.title,
        content: form.content.as_deref(),
    };

    let note = database
        .create_note(&values)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!("Created note {} for trip {}", note.id, note.trip_id);

    Ok(Success::created(NoteResponse::from_note(note)))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateNoteForm {
    trip_id: Patch<i64>,
    title: Patch<String>,
    content: Patch<String>,
}

pub async fn update(
    Extension(database): Extension<Database>,
    PathParameters(note_id): PathParameters<i64>,
    Form(form): Form<UpdateNoteForm>,
) -> Result<Success<NoteResponse>, Error> {
    Violations::new()
        .required_id_patch("trip_id", &form.trip_id)
        .required_text_patch("title", &form.title, 1, NAME_MAX_LENGTH)
        .finish()?;

    let note = fetch_note(&database, note_id).await?;

    ensure_trip_exists(&database, form.trip_id.value()).await?;

    let values = UpdateNoteValues {
        trip_id: form.trip_id,
        title: form.title,
        content: form.content,
    };

    let note = database
        .update_note(&note, values)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Note not found")), Ok)?;

    tracing::debug!("Updated note {}", note.id);

    Ok(Success::ok(NoteResponse::from_note(note)))
}

pub async fn delete(
    Extension(database): Extension<Database>,
    PathParameters(note_id): PathParameters<i64>,
) -> Result<Success<NoteResponse>, Error> {
    let note = fetch_note(&database, note_id).await?;

    database
        .delete_note(&note)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!("Deleted note {}", note.id);

    Ok(Success::no_content())
}
