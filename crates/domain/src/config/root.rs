use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;

use super::blocking::BlockingConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::notifications::NotificationConfig;
use super::server::ServerConfig;
use super::storage::StorageConfig;

const LOCAL_CONFIG_PATH: &str = "siteward.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/siteward/config.toml";

/// Main configuration structure for Siteward
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Where the rule document is persisted
    #[serde(default)]
    pub storage: StorageConfig,

    /// Block page redirection
    #[serde(default)]
    pub blocking: BlockingConfig,

    /// Upcoming-unblock notifications
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. siteward.toml in current directory
    /// 3. /etc/siteward/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(store) = overrides.storage_path {
            self.storage.path = store;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Server port cannot be 0".to_string()));
        }

        if self.storage.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Storage path cannot be empty".to_string(),
            ));
        }

        if self.blocking.block_page.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Block page cannot be empty".to_string(),
            ));
        }

        if self.notifications.check_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Notification check interval must be at least 1 second".to_string(),
            ));
        }

        if self.notifications.lead_minutes == 0 {
            return Err(ConfigError::Validation(
                "Notification lead time must be at least 1 minute".to_string(),
            ));
        }

        Ok(())
    }

    /// Writes the settings as pretty TOML, creating parent directories.
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize settings: {}", e)))?;
        if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        }
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Absolute URL of the block page.
    ///
    /// A path-style `block_page` is served by this process, so it is anchored
    /// to the bind address; loopback stands in for an unspecified address.
    pub fn block_page_url(&self) -> String {
        let page = self.blocking.block_page.trim();
        if !page.starts_with('/') {
            return page.to_string();
        }

        let host = match self.server.bind_address.parse::<IpAddr>() {
            Ok(ip) if ip.is_unspecified() => "127.0.0.1".to_string(),
            Ok(IpAddr::V6(ip)) => format!("[{}]", ip),
            Ok(ip) => ip.to_string(),
            Err(_) => self.server.bind_address.clone(),
        };
        format!("http://{}:{}{}", host, self.server.port, page)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub storage_path: Option<String>,
    pub log_level: Option<String>,
}
