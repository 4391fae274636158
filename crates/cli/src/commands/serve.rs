use anyhow::Context;
use siteward_api::AppState;
use siteward_domain::Config;
use siteward_jobs::{JobRunner, UnblockNotificationJob};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::di::Services;
use crate::server;

pub async fn run(config: Config) -> anyhow::Result<()> {
    info!("Starting Siteward v{}", env!("CARGO_PKG_VERSION"));

    let services = Services::new(&config)
        .await
        .context("Failed to open rules store")?;
    let snapshot = services.store.snapshot();
    info!(
        store = %config.storage.path,
        blocked_domains = snapshot.blocked_domains.len(),
        exception_urls = snapshot.exception_urls.len(),
        "Rules loaded"
    );

    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new().with_shutdown_token(shutdown.clone());
    if config.notifications.enabled {
        runner = runner.with_unblock_notifications(
            UnblockNotificationJob::new(
                services.dispatcher.get_upcoming_unblocks.clone(),
                services.notifier.clone(),
            )
            .with_interval(config.notifications.check_interval_secs),
        );
    } else {
        info!("Unblock notifications disabled");
    }
    runner.start().await;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
        signal_token.cancel();
    });

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .context("Invalid bind address")?;

    server::start_web_server(
        addr,
        AppState::new(services.dispatcher),
        &config.blocking.block_page,
        shutdown,
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
