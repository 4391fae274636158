pub mod blocking;
pub mod errors;
pub mod logging;
pub mod notifications;
pub mod root;
pub mod server;
pub mod storage;

pub use blocking::BlockingConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use notifications::NotificationConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use storage::StorageConfig;
