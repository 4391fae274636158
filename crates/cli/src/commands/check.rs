use anyhow::Context;
use chrono::DateTime;
use siteward_domain::{Config, LocalInstant, Verdict};

use crate::di::Services;

pub async fn run(config: &Config, url: &str, at: Option<&str>) -> anyhow::Result<()> {
    let services = Services::new(config).await?;

    let evaluation = match at {
        Some(at) => {
            let instant = DateTime::parse_from_rfc3339(at)
                .with_context(|| format!("Invalid --at timestamp '{}'", at))?;
            services
                .dispatcher
                .check_url
                .execute_at(url, LocalInstant::from_datetime(&instant))
        }
        None => services.dispatcher.check_url.execute(url),
    };

    match &evaluation.verdict {
        Verdict::Allowed => {
            let reason = evaluation
                .allow_reason
                .map(|r| r.to_str())
                .unwrap_or_default();
            println!("ALLOWED  {} ({})", url, reason);
        }
        Verdict::Blocked { reason, message } => {
            println!("BLOCKED  {} [{}]", url, reason);
            println!("         {}", message);
        }
    }
    if let Some(domain) = &evaluation.matched_domain {
        println!("rule:    {}", domain);
    }

    Ok(())
}
