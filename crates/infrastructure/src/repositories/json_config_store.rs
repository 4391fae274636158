use arc_swap::ArcSwap;
use async_trait::async_trait;
use siteward_application::ports::{ConfigMutation, ConfigStore};
use siteward_domain::{ConfigDocument, Configuration, DomainError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Configuration persisted as a single JSON document.
///
/// Readers load the current snapshot without locking. Writers hold
/// `write_lock` across mutate, persist and publish, so updates are applied
/// one at a time and a failed write leaves the published snapshot unchanged.
pub struct JsonFileConfigStore {
    path: PathBuf,
    current: ArcSwap<Configuration>,
    write_lock: Mutex<()>,
}

impl JsonFileConfigStore {
    /// Opens the store, creating an empty document when the file is missing.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();

        let config = match read_document(&path).await? {
            Some(config) => config,
            None => {
                let config = Configuration::default();
                write_document(&path, &config).await?;
                info!(path = %path.display(), "Created empty configuration file");
                config
            }
        };

        info!(
            path = %path.display(),
            blocked_domains = config.blocked_domains.len(),
            exception_urls = config.exception_urls.len(),
            "Configuration store opened"
        );

        Ok(Self {
            path,
            current: ArcSwap::from_pointee(config),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigStore for JsonFileConfigStore {
    fn snapshot(&self) -> Arc<Configuration> {
        self.current.load_full()
    }

    async fn reload(&self) -> Result<Arc<Configuration>, DomainError> {
        let _guard = self.write_lock.lock().await;

        let config = match read_document(&self.path).await? {
            Some(config) => config,
            None => {
                warn!(path = %self.path.display(), "Configuration file disappeared, keeping current state");
                return Ok(self.current.load_full());
            }
        };

        let config = Arc::new(config);
        self.current.store(config.clone());
        info!(path = %self.path.display(), "Configuration reloaded");

        Ok(config)
    }

    async fn update(&self, mutation: ConfigMutation) -> Result<Arc<Configuration>, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut next = self.current.load().as_ref().clone();
        mutation(&mut next)?;

        write_document(&self.path, &next).await?;

        let next = Arc::new(next);
        self.current.store(next.clone());
        debug!(path = %self.path.display(), "Configuration persisted");

        Ok(next)
    }
}

async fn read_document(path: &Path) -> Result<Option<Configuration>, DomainError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(DomainError::IoError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    if contents.trim().is_empty() {
        return Ok(Some(Configuration::default()));
    }

    let document = ConfigDocument::from_json(&contents).map_err(|e| {
        DomainError::StorageError(format!("Corrupt configuration file {}: {}", path.display(), e))
    })?;

    let config = document.into_configuration();
    config.validate_document().map_err(|e| {
        DomainError::StorageError(format!("Corrupt configuration file {}: {}", path.display(), e))
    })?;

    Ok(Some(config))
}

/// Writes to a sibling temp file and renames it over `path`.
async fn write_document(path: &Path, config: &Configuration) -> Result<(), DomainError> {
    let json = config.to_json()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            DomainError::IoError(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, json.as_bytes())
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write {}: {}", tmp.display(), e)))?;

    tokio::fs::rename(&tmp, path).await.map_err(|e| {
        DomainError::IoError(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}
