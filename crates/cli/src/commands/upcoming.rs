use siteward_domain::Config;

use crate::di::Services;

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let services = Services::new(config).await?;
    let upcoming = services.dispatcher.get_upcoming_unblocks.execute();

    if upcoming.is_empty() {
        println!(
            "No blocking windows end in the next {} minutes.",
            config.notifications.lead_minutes
        );
        return Ok(());
    }

    for unblock in upcoming {
        println!("{:>3} min  {}", unblock.minutes_until_free, unblock.label);
    }

    Ok(())
}
