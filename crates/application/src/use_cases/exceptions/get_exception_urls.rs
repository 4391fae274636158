use siteward_domain::ExceptionRule;
use std::sync::Arc;
use tracing::instrument;

use crate::ports::ConfigStore;

pub struct GetExceptionUrlsUseCase {
    store: Arc<dyn ConfigStore>,
}

impl GetExceptionUrlsUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn execute(&self) -> Vec<ExceptionRule> {
        self.store.snapshot().exception_urls.clone()
    }
}
