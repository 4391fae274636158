use async_trait::async_trait;
use siteward_domain::{Configuration, DomainError};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Mutation applied to a private copy of the configuration. Returning an
/// error leaves the stored configuration untouched.
pub type ConfigMutation =
    Box<dyn FnOnce(&mut Configuration) -> Result<(), DomainError> + Send + 'static>;

/// Owner of the persisted configuration.
///
/// Readers take an immutable snapshot and never wait on writers. Writers are
/// serialized by the store: a mutation sees the result of every update that
/// completed before it, and the new snapshot is published only after it has
/// been persisted.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    fn snapshot(&self) -> Arc<Configuration>;

    async fn reload(&self) -> Result<Arc<Configuration>, DomainError>;

    async fn update(&self, mutation: ConfigMutation) -> Result<Arc<Configuration>, DomainError>;
}

/// Runs `f` as a store update and hands back the value it produced.
pub async fn modify_config<T, F>(store: &dyn ConfigStore, f: F) -> Result<T, DomainError>
where
    T: Send + 'static,
    F: FnOnce(&mut Configuration) -> Result<T, DomainError> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();

    store
        .update(Box::new(move |config| {
            let value = f(config)?;
            let _ = tx.send(value);
            Ok(())
        }))
        .await?;

    rx.await.map_err(|_| {
        DomainError::StorageError("Configuration update finished without a result".to_string())
    })
}
