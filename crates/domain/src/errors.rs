use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid time window: {0}")]
    InvalidTimeWindow(String),

    #[error("Invalid blocked domain: {0}")]
    InvalidBlockedDomain(String),

    #[error("Invalid exception URL: {0}")]
    InvalidExceptionUrl(String),

    #[error("Invalid site note: {0}")]
    InvalidSiteNote(String),

    #[error("No notes stored for domain: {0}")]
    SiteNotesNotFound(String),

    #[error("Site note not found: {0}")]
    SiteNoteNotFound(String),

    #[error("Invalid configuration document: {0}")]
    InvalidImport(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}
