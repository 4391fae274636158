use siteward_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{InterceptNavigationUseCase, NavigationAction};
use crate::ports::{BrowserTab, BrowserTabs};

/// A tab committed to a new URL: remember it and redirect when blocked.
pub struct HandleTabUpdateUseCase {
    tabs: Arc<dyn BrowserTabs>,
    intercept: Arc<InterceptNavigationUseCase>,
}

impl HandleTabUpdateUseCase {
    pub fn new(tabs: Arc<dyn BrowserTabs>, intercept: Arc<InterceptNavigationUseCase>) -> Self {
        Self { tabs, intercept }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, tab: BrowserTab) -> Result<NavigationAction, DomainError> {
        let action = self.intercept.execute(&tab.url);
        let tab_id = tab.id;

        self.tabs.track_tab(tab).await?;

        if let NavigationAction::Redirect { ref url, .. } = action {
            self.tabs.redirect(tab_id, url).await?;
            info!(tab_id = tab_id, redirect = %url, "Tab redirected to block page");
        }

        Ok(action)
    }
}
