pub mod json_config_store;

pub use json_config_store::JsonFileConfigStore;
