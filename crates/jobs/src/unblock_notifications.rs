use siteward_application::ports::Notifier;
use siteward_application::use_cases::GetUpcomingUnblocksUseCase;
use siteward_domain::upcoming::UNBLOCK_NOTIFICATION_TITLE;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Periodically looks for blocking windows about to end and schedules a
/// notification one minute before each of them.
///
/// A notification is keyed by `<label>-<minutes>`; a key that is already
/// pending is not scheduled twice.
pub struct UnblockNotificationJob {
    upcoming: Arc<GetUpcomingUnblocksUseCase>,
    notifier: Arc<dyn Notifier>,
    interval_secs: u64,
    pending: Arc<Mutex<HashSet<String>>>,
    shutdown: CancellationToken,
}

impl UnblockNotificationJob {
    pub fn new(upcoming: Arc<GetUpcomingUnblocksUseCase>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            upcoming,
            notifier,
            interval_secs: 900,
            pending: Arc::new(Mutex::new(HashSet::new())),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting unblock notification job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("UnblockNotificationJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let scheduled = self.check_once().await;
                        if scheduled > 0 {
                            info!(scheduled = scheduled, "Unblock notifications scheduled");
                        }
                    }
                }
            }
        });
    }

    /// Runs one planning pass and returns how many notifications it scheduled.
    pub async fn check_once(self: &Arc<Self>) -> usize {
        let mut scheduled = 0;

        for unblock in self.upcoming.execute() {
            let lead = unblock.minutes_until_free.saturating_sub(1);
            if lead == 0 {
                debug!(label = %unblock.label, "Unblock too close to notify in advance");
                continue;
            }

            let key = unblock.key();
            if !self.pending.lock().await.insert(key.clone()) {
                debug!(key = %key, "Notification already pending");
                continue;
            }

            let job = Arc::clone(self);
            let body = unblock.notification_body();
            let delay = Duration::from_secs(u64::from(lead) * 60);
            tokio::spawn(async move {
                tokio::select! {
                    _ = job.shutdown.cancelled() => {}
                    _ = tokio::time::sleep(delay) => {
                        if let Err(e) = job.notifier.notify(UNBLOCK_NOTIFICATION_TITLE, &body).await {
                            warn!(error = %e, key = %key, "Failed to deliver unblock notification");
                        }
                    }
                }
                job.pending.lock().await.remove(&key);
            });
            scheduled += 1;
        }

        scheduled
    }

    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}
