use siteward_application::commands::CommandDispatcher;
use siteward_application::ports::{BrowserTabs, Clock, ConfigStore, Notifier};
use siteward_domain::{Config, DomainError};
use siteward_infrastructure::repositories::JsonFileConfigStore;
use siteward_infrastructure::system::{InMemoryTabRegistry, SystemClock, TracingNotifier};
use std::sync::Arc;

/// Adapters and use cases wired for one configuration.
pub struct Services {
    pub store: Arc<dyn ConfigStore>,
    pub notifier: Arc<dyn Notifier>,
    pub dispatcher: Arc<CommandDispatcher>,
}

impl Services {
    pub async fn new(config: &Config) -> Result<Self, DomainError> {
        let store: Arc<dyn ConfigStore> =
            Arc::new(JsonFileConfigStore::open(&config.storage.path).await?);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let tabs: Arc<dyn BrowserTabs> = Arc::new(InMemoryTabRegistry::new());
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

        let dispatcher = Arc::new(CommandDispatcher::from_ports(
            store.clone(),
            clock,
            tabs,
            config.block_page_url(),
            config.notifications.lead_minutes,
        ));

        Ok(Self {
            store,
            notifier,
            dispatcher,
        })
    }
}
