use siteward_domain::{Configuration, DomainError, ExceptionRule};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ConfigStore;

pub struct UpdateExceptionUrlsUseCase {
    store: Arc<dyn ConfigStore>,
}

impl UpdateExceptionUrlsUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        rules: Vec<ExceptionRule>,
    ) -> Result<Vec<ExceptionRule>, DomainError> {
        let rules: Vec<ExceptionRule> = rules.into_iter().map(ExceptionRule::normalized).collect();

        Configuration::validate_exception_urls(&rules)?;

        let count = rules.len();
        let updated = self
            .store
            .update(Box::new(move |config| {
                config.exception_urls = rules;
                Ok(())
            }))
            .await?;

        info!(count = count, "Exception URLs updated");

        Ok(updated.exception_urls.clone())
    }
}
