use axum::{extract::State, routing::get, Json, Router};

use crate::{dto::UpcomingUnblockResponse, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/upcoming", get(get_upcoming))
}

async fn get_upcoming(State(state): State<AppState>) -> Json<Vec<UpcomingUnblockResponse>> {
    Json(
        state
            .dispatcher
            .get_upcoming_unblocks
            .execute()
            .into_iter()
            .map(UpcomingUnblockResponse::from_domain)
            .collect(),
    )
}
