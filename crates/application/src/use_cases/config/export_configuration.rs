use siteward_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ConfigStore;

pub struct ExportConfigurationUseCase {
    store: Arc<dyn ConfigStore>,
}

impl ExportConfigurationUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Pretty-printed JSON of the current configuration.
    #[instrument(skip(self))]
    pub fn execute(&self) -> Result<String, DomainError> {
        let config = self.store.snapshot();
        let json = config.to_json()?;

        info!(
            blocked_domains = config.blocked_domains.len(),
            exception_urls = config.exception_urls.len(),
            "Configuration exported"
        );

        Ok(json)
    }
}
