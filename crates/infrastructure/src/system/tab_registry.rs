use async_trait::async_trait;
use siteward_application::ports::{BrowserTab, BrowserTabs};
use siteward_domain::DomainError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Tabs reported by the browser, keyed by tab id.
///
/// A redirect replaces the tab's recorded URL with the block page, which the
/// browser side picks up on its next sync.
#[derive(Debug, Default)]
pub struct InMemoryTabRegistry {
    tabs: RwLock<BTreeMap<i64, String>>,
}

impl InMemoryTabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn remove_tab(&self, tab_id: i64) -> bool {
        self.tabs.write().await.remove(&tab_id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.tabs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tabs.read().await.is_empty()
    }
}

#[async_trait]
impl BrowserTabs for InMemoryTabRegistry {
    async fn list_tabs(&self) -> Result<Vec<BrowserTab>, DomainError> {
        Ok(self
            .tabs
            .read()
            .await
            .iter()
            .map(|(id, url)| BrowserTab::new(*id, url.clone()))
            .collect())
    }

    async fn track_tab(&self, tab: BrowserTab) -> Result<(), DomainError> {
        debug!(tab_id = tab.id, url = %tab.url, "Tab tracked");
        self.tabs.write().await.insert(tab.id, tab.url);
        Ok(())
    }

    async fn redirect(&self, tab_id: i64, url: &str) -> Result<(), DomainError> {
        let mut tabs = self.tabs.write().await;
        let current = tabs
            .get_mut(&tab_id)
            .ok_or_else(|| DomainError::NotFound(format!("Tab {} is not tracked", tab_id)))?;

        *current = url.to_string();
        info!(tab_id = tab_id, url = %url, "Tab redirected");

        Ok(())
    }
}
