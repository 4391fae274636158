use siteward_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{InterceptNavigationUseCase, NavigationAction};
use crate::ports::BrowserTabs;

/// Re-checks every open tab against the current configuration.
pub struct CheckAllTabsUseCase {
    tabs: Arc<dyn BrowserTabs>,
    intercept: Arc<InterceptNavigationUseCase>,
}

impl CheckAllTabsUseCase {
    pub fn new(tabs: Arc<dyn BrowserTabs>, intercept: Arc<InterceptNavigationUseCase>) -> Self {
        Self { tabs, intercept }
    }

    /// Returns the number of tabs that were redirected. A tab that cannot be
    /// redirected is skipped.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let tabs = self.tabs.list_tabs().await?;
        let mut redirected = 0;

        for tab in &tabs {
            let NavigationAction::Redirect { url, .. } = self.intercept.execute(&tab.url) else {
                continue;
            };
            match self.tabs.redirect(tab.id, &url).await {
                Ok(()) => redirected += 1,
                Err(e) => warn!(tab_id = tab.id, error = %e, "Failed to redirect tab"),
            }
        }

        info!(checked = tabs.len(), redirected = redirected, "Open tabs checked");

        Ok(redirected)
    }
}
