use anyhow::bail;
use siteward_domain::Config;
use std::path::Path;
use tracing::info;

/// Writes the effective settings, overrides included, as a TOML file.
pub fn run(config: &Config, output: &str, force: bool) -> anyhow::Result<()> {
    if Path::new(output).exists() && !force {
        bail!("{} already exists (pass --force to overwrite)", output);
    }

    config.save(output)?;
    info!(path = %output, "Settings written");
    println!("Wrote settings to {}", output);

    Ok(())
}
