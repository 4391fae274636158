use serde::{Deserialize, Serialize};
use siteward_domain::Configuration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub success: bool,
    pub blocked_domains: usize,
    pub exception_urls: usize,
    pub site_notes: usize,
}

impl ImportResponse {
    pub fn from_domain(config: &Configuration) -> Self {
        Self {
            success: true,
            blocked_domains: config.blocked_domains.len(),
            exception_urls: config.exception_urls.len(),
            site_notes: config.site_notes.len(),
        }
    }
}
