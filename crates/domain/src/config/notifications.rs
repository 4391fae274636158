use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_check_interval_secs")]
    pub check_interval_secs: u64,

    /// How close to the end of a blocking window a domain is reported.
    #[serde(default = "default_lead_minutes")]
    pub lead_minutes: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_interval_secs: default_check_interval_secs(),
            lead_minutes: default_lead_minutes(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_check_interval_secs() -> u64 {
    900
}

fn default_lead_minutes() -> u32 {
    30
}
