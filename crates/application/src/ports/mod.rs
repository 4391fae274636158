mod browser_tabs;
mod clock;
mod config_store;
mod notifier;

pub use browser_tabs::{BrowserTab, BrowserTabs};
pub use clock::Clock;
pub use config_store::{modify_config, ConfigMutation, ConfigStore};
pub use notifier::Notifier;
