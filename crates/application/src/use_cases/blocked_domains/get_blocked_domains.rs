use siteward_domain::BlockedDomainRule;
use std::sync::Arc;
use tracing::instrument;

use crate::ports::ConfigStore;

pub struct GetBlockedDomainsUseCase {
    store: Arc<dyn ConfigStore>,
}

impl GetBlockedDomainsUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn execute(&self) -> Vec<BlockedDomainRule> {
        self.store.snapshot().blocked_domains.clone()
    }
}
