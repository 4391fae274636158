use axum::{extract::State, routing::get, Json, Router};
use siteward_domain::ExceptionRule;

use crate::{errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/exception-urls",
        get(get_exception_urls).put(update_exception_urls),
    )
}

async fn get_exception_urls(State(state): State<AppState>) -> Json<Vec<ExceptionRule>> {
    Json(state.dispatcher.get_exception_urls.execute())
}

async fn update_exception_urls(
    State(state): State<AppState>,
    Json(rules): Json<Vec<ExceptionRule>>,
) -> Result<Json<Vec<ExceptionRule>>, ApiError> {
    let rules = state.dispatcher.update_exception_urls.execute(rules).await?;
    state.dispatcher.sweep_tabs().await;
    Ok(Json(rules))
}
