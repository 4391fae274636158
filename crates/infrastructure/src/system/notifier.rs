use async_trait::async_trait;
use siteward_application::ports::Notifier;
use siteward_domain::DomainError;
use tracing::info;

/// Emits notifications as log events.
#[derive(Debug, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<(), DomainError> {
        info!(title = %title, body = %body, "Notification");
        Ok(())
    }
}
