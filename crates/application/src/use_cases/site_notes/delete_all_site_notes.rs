use siteward_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{modify_config, ConfigStore};

pub struct DeleteAllSiteNotesUseCase {
    store: Arc<dyn ConfigStore>,
}

impl DeleteAllSiteNotesUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Drops every note for `domain` and returns how many there were.
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<usize, DomainError> {
        let domain = domain.trim().to_string();

        let key = domain.clone();
        let count = modify_config(self.store.as_ref(), move |config| {
            let count = config
                .notes_for(&key)
                .map(|site| site.notes.len())
                .unwrap_or(0);
            config.site_notes.retain(|site| site.domain != key);
            Ok(count)
        })
        .await?;

        info!(domain = %domain, count = count, "Site notes cleared");

        Ok(count)
    }
}
