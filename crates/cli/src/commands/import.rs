use anyhow::Context;
use siteward_domain::Config;
use std::path::Path;

use crate::di::Services;

pub async fn run(config: &Config, file: &Path) -> anyhow::Result<()> {
    let json = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let services = Services::new(config).await?;
    let imported = services
        .dispatcher
        .import_configuration
        .execute(&json)
        .await?;

    println!(
        "Imported {} blocked domains, {} exception URLs, {} site note groups into {}",
        imported.blocked_domains.len(),
        imported.exception_urls.len(),
        imported.site_notes.len(),
        config.storage.path
    );

    Ok(())
}
