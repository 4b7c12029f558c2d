//! JSON REST handlers for notes.

use std::str::FromStr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use notekeep_app::ports::NoteRepository;
use notekeep_app::services::note_service::UpdateOutcome;
use notekeep_domain::id::NoteId;
use notekeep_domain::note::{Note, NotePatch};

use crate::error::ApiError;
use crate::state::AppState;

/// JSON message body for update and delete confirmations.
#[derive(Serialize)]
pub(crate) struct MessageBody {
    pub(crate) message: &'static str,
}

/// Response body for a successful creation.
#[derive(Serialize)]
pub struct NoteCreated {
    pub id: NoteId,
    pub message: &'static str,
}

/// Parse a path segment as a note identifier.
///
/// Non-numeric segments and the literal `0` are treated as absent rather
/// than invalid: GET degrades to the list operation, mutating methods
/// report a missing identifier.
fn parse_id(segment: &str) -> Option<NoteId> {
    NoteId::from_str(segment)
        .ok()
        .filter(|id| id.as_i64() != 0)
}

/// Decode a raw request body into a [`NotePatch`].
///
/// An empty body counts as an empty object; anything else must be valid
/// JSON.
fn decode_body(body: &Bytes) -> Result<NotePatch, ApiError> {
    if body.is_empty() {
        return Ok(NotePatch::default());
    }
    serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Note>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    /// A single note, when an identifier was present.
    One(Json<Note>),
    /// The full collection, when the identifier was absent.
    Many(Json<Vec<Note>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::One(json) => json.into_response(),
            Self::Many(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<NoteCreated>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Updated,
    NothingToUpdate,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Updated => "Note updated",
            Self::NothingToUpdate => "Nothing to update",
        };
        Json(MessageBody { message }).into_response()
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(MessageBody {
                message: "Note deleted",
            })
            .into_response(),
        }
    }
}

/// `GET /notes`
pub async fn list<NR>(State(state): State<AppState<NR>>) -> Result<ListResponse, ApiError>
where
    NR: NoteRepository + Send + Sync + 'static,
{
    let notes = state.note_service.list_notes().await?;
    Ok(ListResponse::Ok(Json(notes)))
}

/// `GET /notes/{id}`
pub async fn get<NR>(
    State(state): State<AppState<NR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    NR: NoteRepository + Send + Sync + 'static,
{
    match parse_id(&id) {
        Some(id) => {
            let note = state.note_service.get_note(id).await?;
            Ok(GetResponse::One(Json(note)))
        }
        None => {
            let notes = state.note_service.list_notes().await?;
            Ok(GetResponse::Many(Json(notes)))
        }
    }
}

/// `POST /notes`
pub async fn create<NR>(
    State(state): State<AppState<NR>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    NR: NoteRepository + Send + Sync + 'static,
{
    let patch = decode_body(&body)?;
    let id = state.note_service.create_note(patch).await?;
    Ok(CreateResponse::Created(Json(NoteCreated {
        id,
        message: "Note created",
    })))
}

/// `POST /notes/{id}` — creation ignores any identifier segment.
pub async fn create_with_id<NR>(
    state: State<AppState<NR>>,
    Path(_id): Path<String>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    NR: NoteRepository + Send + Sync + 'static,
{
    create(state, body).await
}

/// `PUT /notes/{id}` and `PATCH /notes/{id}`
///
/// The body is decoded before the identifier check, so an invalid body
/// wins over a missing identifier.
pub async fn update<NR>(
    State(state): State<AppState<NR>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    NR: NoteRepository + Send + Sync + 'static,
{
    let patch = decode_body(&body)?;
    let Some(id) = parse_id(&id) else {
        return Err(ApiError::MissingId { action: "update" });
    };
    match state.note_service.update_note(id, patch).await? {
        UpdateOutcome::Updated => Ok(UpdateResponse::Updated),
        UpdateOutcome::NothingToUpdate => Ok(UpdateResponse::NothingToUpdate),
    }
}

/// `PUT /notes` and `PATCH /notes` — no identifier segment at all.
pub async fn update_missing_id(body: Bytes) -> Result<UpdateResponse, ApiError> {
    decode_body(&body)?;
    Err(ApiError::MissingId { action: "update" })
}

/// `DELETE /notes/{id}`
pub async fn delete<NR>(
    State(state): State<AppState<NR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    NR: NoteRepository + Send + Sync + 'static,
{
    let Some(id) = parse_id(&id) else {
        return Err(ApiError::MissingId { action: "delete" });
    };
    state.note_service.delete_note(id).await?;
    Ok(DeleteResponse::Deleted)
}

/// `DELETE /notes` — no identifier segment at all.
pub async fn delete_missing_id() -> ApiError {
    ApiError::MissingId { action: "delete" }
}
