use siteward_domain::{evaluate_detailed, Evaluation, LocalInstant, Verdict};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::{Clock, ConfigStore};

pub struct CheckUrlUseCase {
    store: Arc<dyn ConfigStore>,
    clock: Arc<dyn Clock>,
}

impl CheckUrlUseCase {
    pub fn new(store: Arc<dyn ConfigStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn execute(&self, url: &str) -> Evaluation {
        self.execute_at(url, self.clock.local_instant())
    }

    #[instrument(skip(self))]
    pub fn execute_at(&self, url: &str, now: LocalInstant) -> Evaluation {
        let config = self.store.snapshot();
        let evaluation = evaluate_detailed(url, &config, now);

        match &evaluation.verdict {
            Verdict::Blocked { reason, .. } => info!(
                hostname = %evaluation.hostname,
                matched_domain = ?evaluation.matched_domain,
                reason = %reason,
                "Navigation blocked"
            ),
            Verdict::Allowed => debug!(
                hostname = %evaluation.hostname,
                reason = evaluation.allow_reason.map(|r| r.to_str()).unwrap_or_default(),
                "Navigation allowed"
            ),
        }

        evaluation
    }
}
