use anyhow::Context;
use siteward_domain::Config;
use std::path::Path;
use tracing::info;

use crate::di::Services;

pub async fn run(config: &Config, output: Option<&Path>) -> anyhow::Result<()> {
    let services = Services::new(config).await?;
    let json = services.dispatcher.export_configuration.execute()?;

    match output {
        Some(path) => {
            tokio::fs::write(path, json.as_bytes())
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Rules exported");
        }
        None => println!("{}", json),
    }

    Ok(())
}
