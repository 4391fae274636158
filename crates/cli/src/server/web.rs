use axum::Router;
use siteward_api::{create_api_routes, create_page_routes, AppState};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use url::Url;

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    block_page: &str,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        api_url = format!("http://{}/api", bind_addr),
        "Starting web server"
    );

    let app = create_app(state, block_page);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    Ok(())
}

fn create_app(state: AppState, block_page: &str) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .merge(create_page_routes(&block_page_path(block_page)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Route path for the block page, which may be configured as a full URL.
fn block_page_path(block_page: &str) -> String {
    let path = if block_page.starts_with('/') {
        block_page.split('?').next().unwrap_or(block_page).to_string()
    } else {
        Url::parse(block_page)
            .map(|url| url.path().to_string())
            .unwrap_or_else(|_| format!("/{}", block_page.trim_start_matches('/')))
    };

    if path.is_empty() || path == "/" {
        "/blocked".to_string()
    } else {
        path
    }
}
