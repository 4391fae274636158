use siteward_domain::Configuration;
use std::sync::Arc;

use crate::ports::ConfigStore;

pub struct GetConfigurationUseCase {
    store: Arc<dyn ConfigStore>,
}

impl GetConfigurationUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Arc<Configuration> {
        self.store.snapshot()
    }
}
