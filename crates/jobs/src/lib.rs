pub mod runner;
pub mod unblock_notifications;

pub use runner::JobRunner;
pub use unblock_notifications::UnblockNotificationJob;
