use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{
        CreateNoteRequest, DeleteNoteResponse, ErrorResponse, NoteResponse, UpdateNoteRequest,
    },
    service::{NoteService, ServiceError},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        get_all_notes,
        get_one_note,
        create_note,
        update_note,
        delete_note,
        mark_important
    ),
    components(schemas(
        NoteResponse,
        CreateNoteRequest,
        UpdateNoteRequest,
        DeleteNoteResponse,
        ErrorResponse
    )),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

fn error_response(e: &ServiceError, context: &str) -> Response {
    tracing::error!("{context}: {e}");
    (
        e.status_code(),
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteResponse>),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    match service.get_all_notes().await {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => error_response(&e, "failed to get note entries"),
    }
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_one_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.get_one_note(id).await {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => error_response(&e, "failed to get note entry"),
    }
}

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    Json(payload): Json<CreateNoteRequest>,
) -> Response {
    match service.create_note(payload).await {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => error_response(&e, "failed to create note entry"),
    }
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteResponse),
        (status = 400, description = "No fields to update", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateNoteRequest>,
) -> Response {
    match service.update_note(id, payload).await {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => error_response(&e, "failed to update note entry"),
    }
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note deleted successfully", body = DeleteNoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(State(service): State<Arc<NoteService>>, Path(id): Path<i64>) -> Response {
    match service.delete_note(id).await {
        Ok(confirmation) => (StatusCode::OK, Json(confirmation)).into_response(),
        Err(e) => error_response(&e, "failed to delete note entry"),
    }
}

#[utoipa::path(
    patch,
    path = "/api/notes/{id}/important",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note marked as important", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn mark_important(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.mark_important(id).await {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => error_response(&e, "failed to mark note entry as important"),
    }
}
