use siteward_domain::{BlockedDomainEntry, BlockedDomainRule, Configuration, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ConfigStore;

/// Replaces the whole blocklist. Entries are trimmed and lowercased, then
/// validated as a unit: one bad entry rejects the update.
pub struct UpdateBlockedDomainsUseCase {
    store: Arc<dyn ConfigStore>,
}

impl UpdateBlockedDomainsUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        entries: Vec<BlockedDomainEntry>,
    ) -> Result<Vec<BlockedDomainRule>, DomainError> {
        let rules: Vec<BlockedDomainRule> = entries
            .into_iter()
            .map(|entry| BlockedDomainRule::from(entry).normalized())
            .collect();

        Configuration::validate_blocked_domains(&rules)?;

        let count = rules.len();
        let updated = self
            .store
            .update(Box::new(move |config| {
                config.blocked_domains = rules;
                Ok(())
            }))
            .await?;

        info!(count = count, "Blocked domains updated");

        Ok(updated.blocked_domains.clone())
    }
}
