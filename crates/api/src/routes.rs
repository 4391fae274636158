use crate::handlers;
use crate::pages;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes served under `/api`.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::messages::routes())
        .merge(handlers::config::routes())
        .merge(handlers::blocked_domains::routes())
        .merge(handlers::exception_urls::routes())
        .merge(handlers::access::routes())
        .merge(handlers::site_notes::routes())
        .merge(handlers::upcoming::routes())
        .with_state(state)
}

/// Browser-facing pages, served at the root.
pub fn create_page_routes(block_page: &str) -> Router {
    Router::new().route(block_page, get(pages::blocked_page))
}
