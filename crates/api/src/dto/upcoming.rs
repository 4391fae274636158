use serde::{Deserialize, Serialize};
use siteward_domain::UpcomingUnblock;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingUnblockResponse {
    pub label: String,
    pub minutes_until_free: u32,
    pub notification: String,
}

impl UpcomingUnblockResponse {
    pub fn from_domain(unblock: UpcomingUnblock) -> Self {
        Self {
            notification: unblock.notification_body(),
            label: unblock.label,
            minutes_until_free: unblock.minutes_until_free,
        }
    }
}
