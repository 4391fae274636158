use crate::configuration::Configuration;
use crate::time_window::LocalInstant;

pub const DEFAULT_LEAD_MINUTES: u32 = 30;

pub const UNBLOCK_NOTIFICATION_TITLE: &str = "Access unlocked soon";

/// A blocked domain whose active blocking window ends soon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingUnblock {
    pub label: String,
    pub minutes_until_free: u32,
}

impl UpcomingUnblock {
    /// Deduplication key for scheduled notifications.
    pub fn key(&self) -> String {
        format!("{}-{}", self.label, self.minutes_until_free)
    }

    pub fn notification_body(&self) -> String {
        format!("{} will be available in 1 minute!", self.label)
    }
}

/// Rules without windows are always blocked and never reported.
pub fn upcoming_unblocks(
    config: &Configuration,
    now: LocalInstant,
    lead_minutes: u32,
) -> Vec<UpcomingUnblock> {
    let mut upcoming = Vec::new();

    for rule in &config.blocked_domains {
        for window in &rule.time_windows {
            if !window.contains(now) {
                continue;
            }
            let minutes = ((window.end_hour - now.hour_of_day) * 60.0).round();
            if minutes > 0.0 && minutes <= lead_minutes as f64 {
                upcoming.push(UpcomingUnblock {
                    label: rule.label().to_string(),
                    minutes_until_free: minutes as u32,
                });
            }
        }
    }

    upcoming
}
