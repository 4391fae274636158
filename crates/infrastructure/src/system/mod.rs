pub mod clock;
pub mod notifier;
pub mod tab_registry;

pub use clock::SystemClock;
pub use notifier::TracingNotifier;
pub use tab_registry::InMemoryTabRegistry;
