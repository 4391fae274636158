use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use siteward_domain::{SiteNote, SiteNoteDraft, SiteNoteUpdate};
use tracing::debug;

use crate::{dto::DeleteNotesResponse, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/site-notes/{domain}",
            get(get_notes).post(add_note).delete(delete_all_notes),
        )
        .route(
            "/site-notes/{domain}/{note_id}",
            put(update_note).delete(delete_note),
        )
}

async fn get_notes(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Json<Vec<SiteNote>> {
    let notes = state.dispatcher.get_site_notes.execute(&domain);
    debug!(domain = %domain, count = notes.len(), "Site notes retrieved");
    Json(notes)
}

async fn add_note(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Json(draft): Json<SiteNoteDraft>,
) -> Result<(StatusCode, Json<SiteNote>), ApiError> {
    let note = state.dispatcher.add_site_note.execute(&domain, draft).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

async fn update_note(
    State(state): State<AppState>,
    Path((domain, note_id)): Path<(String, String)>,
    Json(updates): Json<SiteNoteUpdate>,
) -> Result<Json<SiteNote>, ApiError> {
    let note = state
        .dispatcher
        .update_site_note
        .execute(&domain, &note_id, updates)
        .await?;
    Ok(Json(note))
}

async fn delete_note(
    State(state): State<AppState>,
    Path((domain, note_id)): Path<(String, String)>,
) -> Result<Json<DeleteNotesResponse>, ApiError> {
    let removed = state
        .dispatcher
        .delete_site_note
        .execute(&domain, &note_id)
        .await?;
    Ok(Json(DeleteNotesResponse {
        success: true,
        removed: usize::from(removed),
    }))
}

async fn delete_all_notes(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<DeleteNotesResponse>, ApiError> {
    let removed = state.dispatcher.delete_all_site_notes.execute(&domain).await?;
    Ok(Json(DeleteNotesResponse {
        success: true,
        removed,
    }))
}
