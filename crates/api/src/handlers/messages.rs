use axum::{extract::State, routing::post, Json, Router};
use siteward_application::commands::{Command, CommandResponse};
use tracing::debug;

use crate::{errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/messages", post(handle_message))
}

async fn handle_message(
    State(state): State<AppState>,
    Json(command): Json<Command>,
) -> Result<Json<CommandResponse>, ApiError> {
    debug!(action = command.action(), "Command received");
    let response = state.dispatcher.dispatch(command).await?;
    Ok(Json(response))
}
