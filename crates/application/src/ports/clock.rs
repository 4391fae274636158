use chrono::{DateTime, FixedOffset};
use siteward_domain::LocalInstant;

/// Source of the local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    fn local_instant(&self) -> LocalInstant {
        LocalInstant::from_datetime(&self.now())
    }
}
