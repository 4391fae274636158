pub mod access;
pub mod blocked_domains;
pub mod config;
pub mod exception_urls;
pub mod health;
pub mod messages;
pub mod site_notes;
pub mod upcoming;

pub use health::health_check;
