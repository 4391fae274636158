use siteward_domain::{upcoming_unblocks, LocalInstant, UpcomingUnblock};
use std::sync::Arc;
use tracing::debug;

use crate::ports::{Clock, ConfigStore};

pub struct GetUpcomingUnblocksUseCase {
    store: Arc<dyn ConfigStore>,
    clock: Arc<dyn Clock>,
    lead_minutes: u32,
}

impl GetUpcomingUnblocksUseCase {
    pub fn new(store: Arc<dyn ConfigStore>, clock: Arc<dyn Clock>, lead_minutes: u32) -> Self {
        Self {
            store,
            clock,
            lead_minutes,
        }
    }

    pub fn execute(&self) -> Vec<UpcomingUnblock> {
        self.execute_at(self.clock.local_instant())
    }

    pub fn execute_at(&self, now: LocalInstant) -> Vec<UpcomingUnblock> {
        let upcoming = upcoming_unblocks(&self.store.snapshot(), now, self.lead_minutes);
        debug!(count = upcoming.len(), lead_minutes = self.lead_minutes, "Upcoming unblocks computed");
        upcoming
    }
}
