use axum::{extract::State, routing::post, Json, Router};
use siteward_application::ports::BrowserTab;

use crate::{
    dto::{CheckUrlRequest, CheckUrlResponse, NavigationRequest, NavigationResponse, SweepResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/check", post(check_url))
        .route("/navigation", post(navigation))
        .route("/tabs/sweep", post(sweep_tabs))
}

async fn check_url(
    State(state): State<AppState>,
    Json(req): Json<CheckUrlRequest>,
) -> Json<CheckUrlResponse> {
    let evaluation = state.dispatcher.check_url.execute(&req.url);
    Json(CheckUrlResponse::from_domain(evaluation))
}

/// With a `tabId` the tab is registered and redirected server-side as well.
async fn navigation(
    State(state): State<AppState>,
    Json(req): Json<NavigationRequest>,
) -> Result<Json<NavigationResponse>, ApiError> {
    let action = match req.tab_id {
        Some(tab_id) => {
            state
                .dispatcher
                .handle_tab_update
                .execute(BrowserTab::new(tab_id, req.url))
                .await?
        }
        None => state.dispatcher.intercept_navigation.execute(&req.url),
    };
    Ok(Json(NavigationResponse::from_domain(action)))
}

async fn sweep_tabs(State(state): State<AppState>) -> Result<Json<SweepResponse>, ApiError> {
    let redirected = state.dispatcher.check_all_tabs.execute().await?;
    Ok(Json(SweepResponse { redirected }))
}
