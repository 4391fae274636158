/// Errors from the TOML settings file. Rule-store failures are
/// [`DomainError`](crate::DomainError)s instead.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read settings file {0}: {1}")]
    FileRead(String, String),

    #[error("Cannot write settings file {0}: {1}")]
    FileWrite(String, String),

    #[error("Invalid settings TOML: {0}")]
    Parse(String),

    #[error("Invalid setting: {0}")]
    Validation(String),
}
