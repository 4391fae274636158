use async_trait::async_trait;
use siteward_domain::DomainError;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, title: &str, body: &str) -> Result<(), DomainError>;
}
