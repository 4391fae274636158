use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use siteward_domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserTab {
    pub id: i64,
    pub url: String,
}

impl BrowserTab {
    pub fn new(id: i64, url: impl Into<String>) -> Self {
        Self { id, url: url.into() }
    }
}

/// Open browsing contexts that navigation checks can be applied to.
#[async_trait]
pub trait BrowserTabs: Send + Sync {
    async fn list_tabs(&self) -> Result<Vec<BrowserTab>, DomainError>;

    /// Records the tab's current URL.
    async fn track_tab(&self, tab: BrowserTab) -> Result<(), DomainError>;

    async fn redirect(&self, tab_id: i64, url: &str) -> Result<(), DomainError>;
}
