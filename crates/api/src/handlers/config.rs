use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use siteward_domain::Configuration;

use crate::{dto::ImportResponse, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/config", get(get_config))
        .route("/export", get(export_config))
        .route("/import", post(import_config))
}

async fn get_config(State(state): State<AppState>) -> Json<Configuration> {
    Json(state.dispatcher.get_configuration.execute().as_ref().clone())
}

async fn export_config(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let json = state.dispatcher.export_configuration.execute()?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"siteward-config.json\"",
            ),
        ],
        json,
    ))
}

/// Body is the raw exported document.
async fn import_config(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportResponse>, ApiError> {
    let config = state.dispatcher.import_configuration.execute(&body).await?;
    state.dispatcher.sweep_tabs().await;
    Ok(Json(ImportResponse::from_domain(&config)))
}
