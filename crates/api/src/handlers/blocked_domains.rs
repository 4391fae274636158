use axum::{extract::State, routing::get, Json, Router};
use siteward_domain::{BlockedDomainEntry, BlockedDomainRule};
use tracing::debug;

use crate::{errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/blocked-domains",
        get(get_blocked_domains).put(update_blocked_domains),
    )
}

async fn get_blocked_domains(State(state): State<AppState>) -> Json<Vec<BlockedDomainRule>> {
    let rules = state.dispatcher.get_blocked_domains.execute();
    debug!(count = rules.len(), "Blocked domains retrieved");
    Json(rules)
}

async fn update_blocked_domains(
    State(state): State<AppState>,
    Json(entries): Json<Vec<BlockedDomainEntry>>,
) -> Result<Json<Vec<BlockedDomainRule>>, ApiError> {
    let rules = state.dispatcher.update_blocked_domains.execute(entries).await?;
    state.dispatcher.sweep_tabs().await;
    Ok(Json(rules))
}
