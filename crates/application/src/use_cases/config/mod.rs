pub mod export_configuration;
pub mod get_configuration;
pub mod import_configuration;

pub use export_configuration::ExportConfigurationUseCase;
pub use get_configuration::GetConfigurationUseCase;
pub use import_configuration::ImportConfigurationUseCase;
