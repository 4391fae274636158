use siteward_domain::{
    BlockedDomainRule, ConfigDocument, Configuration, DomainError, ExceptionRule,
};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ConfigStore;

/// Replaces the whole configuration with an exported document.
///
/// Accepts every document the store itself loads, so exports always
/// re-import.
pub struct ImportConfigurationUseCase {
    store: Arc<dyn ConfigStore>,
}

impl ImportConfigurationUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, json))]
    pub async fn execute(&self, json: &str) -> Result<Arc<Configuration>, DomainError> {
        let mut imported = ConfigDocument::from_json(json)?.into_configuration();

        imported.blocked_domains = imported
            .blocked_domains
            .into_iter()
            .map(BlockedDomainRule::normalized)
            .collect();
        imported.exception_urls = imported
            .exception_urls
            .into_iter()
            .map(ExceptionRule::normalized)
            .collect();
        imported.site_notes.retain(|site| !site.notes.is_empty());

        imported
            .validate_document()
            .map_err(|e| DomainError::InvalidImport(e.to_string()))?;

        let updated = self
            .store
            .update(Box::new(move |config| {
                *config = imported;
                Ok(())
            }))
            .await?;

        info!(
            blocked_domains = updated.blocked_domains.len(),
            exception_urls = updated.exception_urls.len(),
            site_notes = updated.site_notes.len(),
            "Configuration imported"
        );

        Ok(updated)
    }
}
